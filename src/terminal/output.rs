//! Terminal output utilities.
//!
//! Box drawing into a text buffer and stderr colouring.

use std::fmt::Write;

use crossterm::style::Stylize;

// ============================================================================
// Terminal Detection
// ============================================================================

/// Whether stderr is attached to a terminal.
pub fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDERR_FILENO) == 1 }
}

/// Red text when stderr is a terminal, plain text otherwise.
pub fn red(msg: &str) -> String {
    if stderr_is_tty() {
        msg.red().to_string()
    } else {
        msg.to_string()
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const FLAG_COL: usize = 24;

/// Accumulates a box-drawn text block.
#[derive(Debug, Default)]
pub struct TextBox {
    buf: String,
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Box top with optional title: ┌─ Title ───────────────────────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        if title.is_empty() {
            let _ = writeln!(self.buf, "┌{}┐", "─".repeat(BOX_WIDTH - 2));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            let _ = writeln!(self.buf, "┌{}{}┐", title_part, "─".repeat(remaining));
        }
        self
    }

    /// Left-aligned content line: │ content                          │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(content.chars().count());
        let _ = writeln!(self.buf, "│ {}{} │", content, " ".repeat(padding));
        self
    }

    /// Centered content line.
    pub fn line_center(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(content.chars().count());
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        let _ = writeln!(
            self.buf,
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
        self
    }

    /// Option row: flag column, then the description word-wrapped beside it.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let desc_col = BOX_WIDTH - 4 - FLAG_COL;

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }

        for (i, text) in lines.iter().enumerate() {
            let left = if i == 0 { flag } else { "" };
            let row = format!("{:<width$}{}", left, text, width = FLAG_COL);
            self.line(&row);
        }
        self
    }

    /// Box bottom: └──────────────────────────────────────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        let _ = writeln!(self.buf, "└{}┘", "─".repeat(BOX_WIDTH - 2));
        self
    }

    pub fn finish(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}
