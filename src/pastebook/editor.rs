use crate::error::{PasteError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

/// Title and body of a paste as edited in a text buffer.
/// Format: title\n\ncontent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub content: String,
}

impl EditorContent {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }

    /// Formats the content for the editor buffer.
    pub fn to_buffer(&self) -> String {
        if self.content.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.content)
        }
    }

    /// Parses an editor buffer back into title and content.
    /// The first line is the title; blank lines after it are skipped.
    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines();
        let title = lines.next().unwrap_or_default().trim().to_string();
        let body: Vec<&str> = lines.skip_while(|l| l.trim().is_empty()).collect();
        Self {
            title,
            content: body.join("\n").trim_end().to_string(),
        }
    }
}

const FALLBACK_EDITOR: &str = "vi";

/// $VISUAL, then $EDITOR, then `vi`.
fn get_editor() -> String {
    pick_editor(env::var("VISUAL").ok(), env::var("EDITOR").ok())
}

fn pick_editor(visual: Option<String>, editor: Option<String>) -> String {
    visual
        .into_iter()
        .chain(editor)
        .find(|cmd| !cmd.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Opens a file in the user's editor and returns its contents once it closes.
fn open_in_editor(path: &Path) -> Result<String> {
    let editor = get_editor();
    // "code -w" style commands carry their own flags
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(FALLBACK_EDITOR);

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| PasteError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(PasteError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(PasteError::Io)
}

/// Opens an editor with initial content and returns the edited content.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join(format!("pastebook-{}.txt", Uuid::new_v4()));
    fs::write(&temp_file, initial.to_buffer()).map_err(PasteError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result?))
}
