use chrono::{DateTime, Local, TimeZone, Utc};
use colored::Colorize;
use pastebook::api::{CmdMessage, MessageLevel};
use pastebook::identity::Identity;
use pastebook::model::Paste;
use std::fmt::Display;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 20;
const TIME_WIDTH: usize = 16;
const OWNED_MARKER: &str = "✎";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

/// `edit_url` is only passed for pastes the viewer owns.
pub(super) fn print_full_paste(paste: &Paste, share_url: &str, edit_url: Option<&str>) {
    println!("{}", paste.title.bold());
    println!(
        "{}",
        format!("{} · {}", paste.id, format_date(paste.created_at)).dimmed()
    );
    if edit_url.is_some() {
        println!("{}", "You own this paste".dimmed());
    }
    println!("--------------------------------");
    println!("{}", paste.content);
    println!("--------------------------------");
    println!("{}", share_url.dimmed());
    if let Some(edit_url) = edit_url {
        println!("{}", format!("edit: {}", edit_url).dimmed());
    }
}

/// Prints one line per paste; pastes owned by `me` carry a marker.
pub(super) fn print_pastes(pastes: &[Paste], me: &Identity, searching: bool) {
    if pastes.is_empty() {
        if searching {
            println!("No pastes found.");
        } else {
            println!("No pastes yet.");
        }
        return;
    }

    println!("{}", format!("All Pastes ({})", pastes.len()).bold());
    for paste in pastes {
        let marker = if paste.is_owned_by(me) {
            OWNED_MARKER
        } else {
            " "
        };
        let left = format!("  {} {:<width$} ", marker, paste.id, width = ID_WIDTH);
        let available = LINE_WIDTH.saturating_sub(left.width() + TIME_WIDTH);

        let preview: String = paste
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = if preview.is_empty() {
            paste.title.clone()
        } else {
            format!("{} {}", paste.title, preview)
        };
        let shown = truncate_to_width(&line, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "{}{}{}{}",
            left,
            shown,
            " ".repeat(padding),
            format_time_ago(paste.created_at).dimmed()
        );
    }
}

/// Long local date, e.g. "October 16, 2026 at 06:55 PM".
pub(super) fn format_date(timestamp: DateTime<Utc>) -> String {
    format_date_in(timestamp, &Local)
}

fn format_date_in<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format("%B %-d, %Y at %I:%M %p")
        .to_string()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_long_form() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 16, 18, 55, 0).unwrap();
        assert_eq!(format_date_in(ts, &Utc), "October 16, 2026 at 06:55 PM");
    }

    #[test]
    fn test_format_date_morning() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap();
        assert_eq!(format_date_in(ts, &Utc), "March 5, 2024 at 09:07 AM");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
