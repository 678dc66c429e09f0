//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured with `unicode-width` so that CJK names (very common in
//! class rosters) stay aligned. Colours are applied after padding and never
//! count towards the width.

use crate::utils::colors::{BOLD, RESET};
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.text.as_str()));
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, width) in self.columns.iter().zip(&widths) {
            out.push_str(BOLD);
            out.push_str(&pad(&col.header, *width, col.align));
            out.push_str(RESET);
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for ((col, width), cell) in self.columns.iter().zip(&widths).zip(row) {
                let padded = pad(&cell.text, *width, col.align);
                match cell.color {
                    Some(color) => out.push_str(&format!("{color}{padded}{RESET}")),
                    None => out.push_str(&padded),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(text)));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}
