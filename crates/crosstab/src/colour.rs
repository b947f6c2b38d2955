//! Named ANSI styles for colourising cell text.
//!
//! The table never interprets these codes; it only discounts them when
//! measuring width. They are offered so callers can embed styles without
//! spelling out escape sequences.
//!
//! ```rust
//! use crosstab::Colour;
//!
//! assert_eq!(Colour::Red.paint("down"), "\x1b[31;20mdown\x1b[0m");
//! ```

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A named terminal style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colour {
    Red,
    Green,
    Yellow,
    Purple,
    Cyan,
    White,
    Grey,
    BoldRed,
    BoldGreen,
    BoldYellow,
    BoldPurple,
    BoldCyan,
    BoldWhite,
    BoldGrey,
    DimWhite,
    Bold,
    Reset,
}

impl Colour {
    /// Every style, in declaration order.
    pub const ALL: [Colour; 17] = [
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Purple,
        Colour::Cyan,
        Colour::White,
        Colour::Grey,
        Colour::BoldRed,
        Colour::BoldGreen,
        Colour::BoldYellow,
        Colour::BoldPurple,
        Colour::BoldCyan,
        Colour::BoldWhite,
        Colour::BoldGrey,
        Colour::DimWhite,
        Colour::Bold,
        Colour::Reset,
    ];

    /// The escape sequence that switches this style on.
    pub fn code(self) -> &'static str {
        match self {
            Colour::Red => "\x1b[31;20m",
            Colour::Green => "\x1b[32;20m",
            Colour::Yellow => "\x1b[33;20m",
            Colour::Purple => "\x1b[35;20m",
            Colour::Cyan => "\x1b[36;20m",
            Colour::White => "\x1b[37;20m",
            Colour::Grey => "\x1b[38;20m",
            Colour::BoldRed => "\x1b[31;1m",
            Colour::BoldGreen => "\x1b[32;1m",
            Colour::BoldYellow => "\x1b[33;1m",
            Colour::BoldPurple => "\x1b[35;1m",
            Colour::BoldCyan => "\x1b[36;1m",
            Colour::BoldWhite => "\x1b[37;1m",
            Colour::BoldGrey => "\x1b[38;1m",
            Colour::DimWhite => "\x1b[2;20m",
            Colour::Bold => "\x1b[1m",
            Colour::Reset => "\x1b[0m",
        }
    }

    /// The snake_case name used by [`FromStr`] and serde.
    pub fn name(self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Yellow => "yellow",
            Colour::Purple => "purple",
            Colour::Cyan => "cyan",
            Colour::White => "white",
            Colour::Grey => "grey",
            Colour::BoldRed => "bold_red",
            Colour::BoldGreen => "bold_green",
            Colour::BoldYellow => "bold_yellow",
            Colour::BoldPurple => "bold_purple",
            Colour::BoldCyan => "bold_cyan",
            Colour::BoldWhite => "bold_white",
            Colour::BoldGrey => "bold_grey",
            Colour::DimWhite => "dim_white",
            Colour::Bold => "bold",
            Colour::Reset => "reset",
        }
    }

    /// Wraps `text` in this style, followed by a reset.
    pub fn paint(self, text: impl fmt::Display) -> String {
        format!("{}{}{}", self.code(), text, reset())
    }

    /// Writes `text` in this style as a single line.
    pub fn write_line<W: Write>(self, writer: &mut W, text: impl fmt::Display) -> Result<()> {
        writeln!(writer, "{}", self.paint(text))?;
        Ok(())
    }

    /// Shows `message` in this style and reads one line of input.
    ///
    /// The returned line has its trailing newline removed.
    pub fn prompt<R: BufRead, W: Write>(
        self,
        reader: &mut R,
        writer: &mut W,
        message: &str,
    ) -> Result<String> {
        write!(writer, "{}", self.paint(message))?;
        writer.flush()?;

        let mut line = String::new();
        reader.read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// The escape sequence that clears all styling.
pub fn reset() -> &'static str {
    Colour::Reset.code()
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Colour {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Colour::ALL
            .into_iter()
            .find(|colour| colour.name() == wanted)
            .ok_or_else(|| TableError::UnknownColour(s.to_string()))
    }
}
