use crate::error::{PasteError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        // Try xclip first, then xsel
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
            .map_err(|e| PasteError::Api(format!("{}. Install xclip or xsel.", e)))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(PasteError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PasteError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PasteError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| PasteError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(PasteError::Api(format!("{} exited with error", program)))
    }
}

/// What happened when a paste link was shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The link is on the clipboard.
    Copied { url: String },
    /// The clipboard was unavailable; the caller should show the link.
    LinkOnly { url: String, reason: String },
}

impl ShareOutcome {
    pub fn url(&self) -> &str {
        match self {
            ShareOutcome::Copied { url } | ShareOutcome::LinkOnly { url, .. } => url,
        }
    }
}

/// Shares a link. Terminals have no native share sheet, so this goes straight
/// to the clipboard fallback and degrades to handing the link back.
pub fn share(url: &str) -> ShareOutcome {
    share_with(url, copy_to_clipboard)
}

fn share_with<F>(url: &str, copy: F) -> ShareOutcome
where
    F: FnOnce(&str) -> Result<()>,
{
    match copy(url) {
        Ok(()) => ShareOutcome::Copied {
            url: url.to_string(),
        },
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable for share");
            ShareOutcome::LinkOnly {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_copies_link() {
        let outcome = share_with("http://h/pastes/1", |_| Ok(()));
        assert_eq!(
            outcome,
            ShareOutcome::Copied {
                url: "http://h/pastes/1".into()
            }
        );
    }

    #[test]
    fn test_share_falls_back_to_link() {
        let outcome = share_with("http://h/pastes/1", |_| {
            Err(PasteError::Api("no clipboard".into()))
        });
        assert!(matches!(outcome, ShareOutcome::LinkOnly { ref reason, .. } if reason.contains("no clipboard")));
        assert_eq!(outcome.url(), "http://h/pastes/1");
    }
}
