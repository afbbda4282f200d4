use colored::Colorize;
use std::fmt;

use crate::domain::InsightKind;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

impl From<InsightKind> for MessageKind {
    fn from(kind: InsightKind) -> Self {
        match kind {
            InsightKind::Warning => MessageKind::Warning,
            InsightKind::Success => MessageKind::Success,
            InsightKind::Info => MessageKind::Info,
        }
    }
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[+]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Section => ("", ""),
    }
}

/// Renders a line without color codes.
pub fn plain(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    }
}

pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let line = plain(kind, message);
    match kind {
        MessageKind::Success => line.bright_green().to_string(),
        MessageKind::Warning => line.bright_yellow().to_string(),
        MessageKind::Error => line.bright_red().to_string(),
        MessageKind::Section => line.bold().to_string(),
        MessageKind::Info => line,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let line = styled(kind, message);
    match kind {
        MessageKind::Section => println!("\n{line}"),
        MessageKind::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}
