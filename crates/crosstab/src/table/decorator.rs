//! Box-drawing borders for the grid.
//!
//! A [`BorderStyle`] supplies the eleven glyphs a grid needs: the horizontal
//! rule, the vertical bar, four corners, four tees and the cross. The
//! functions here only build the bordered part of a line; the row label
//! column to its left is added by the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Border style for the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    #[default]
    Heavy,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
    /// ASCII borders: +, -, |
    Ascii,
}

impl BorderStyle {
    pub(crate) fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BorderStyle::Heavy => "heavy",
            BorderStyle::Light => "light",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
            BorderStyle::Ascii => "ascii",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heavy" => Ok(BorderStyle::Heavy),
            "light" => Ok(BorderStyle::Light),
            "double" => Ok(BorderStyle::Double),
            "rounded" => Ok(BorderStyle::Rounded),
            "ascii" => Ok(BorderStyle::Ascii),
            _ => Err(TableError::UnknownBorder(s.to_string())),
        }
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

/// Type of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineType {
    Top,
    Middle,
    Bottom,
}

impl BorderChars {
    /// A horizontal rule across `columns` cells of `width` each, e.g. `┏━━┳━━┓`.
    ///
    /// Single-column rules have no joint.
    pub(crate) fn rule(&self, line_type: LineType, columns: usize, width: usize) -> String {
        let (left, joint, right) = match line_type {
            LineType::Top => (self.top_left, self.top_t, self.top_right),
            LineType::Middle => (self.left_t, self.cross, self.right_t),
            LineType::Bottom => (self.bottom_left, self.bottom_t, self.bottom_right),
        };

        let mut line = String::with_capacity((columns * (width + 1) + 1) * 3);
        line.push(left);
        for i in 0..columns {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat_n(self.horizontal, width));
        }
        line.push(right);
        line
    }

    /// Already-padded cells joined and enclosed by vertical bars, e.g. `┃a ┃b ┃`.
    pub(crate) fn row<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let mut line = String::new();
        line.push(self.vertical);
        for cell in cells {
            line.push_str(cell.as_ref());
            line.push(self.vertical);
        }
        line
    }
}
