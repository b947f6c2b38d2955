//! Layout configuration for a [`Table`](crate::Table).
//!
//! ```rust
//! use crosstab::{BorderStyle, TableConfig};
//!
//! let config = TableConfig::new()
//!     .cell_centred(true)
//!     .cell_max_width(12)
//!     .border(BorderStyle::Light);
//! assert!(config.sort_rows);
//! ```
//!
//! The struct also deserializes from YAML or JSON; missing fields take their
//! defaults:
//!
//! ```rust
//! # use crosstab::TableConfig;
//! let config: TableConfig = serde_json::from_str(r#"{"table_left_pad": 0}"#).unwrap();
//! assert_eq!(config.table_left_pad, 0);
//! assert_eq!(config.cell_max_width, 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::table::BorderStyle;

/// Left padding reserved for the row label column when none is configured.
pub const DEFAULT_LEFT_PAD: usize = 2;

/// How a table is laid out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Centre cell text instead of left-aligning it.
    pub cell_centred: bool,
    /// Truncate cell text to this many characters and cap the column width.
    /// `0` means no limit.
    pub cell_max_width: usize,
    /// Extra width given to the row label column beyond its longest label.
    pub table_left_pad: usize,
    /// Sort column headings; otherwise they appear in first-seen order.
    pub sort_columns: bool,
    /// Sort row headings; otherwise they appear in first-seen order.
    pub sort_rows: bool,
    /// Glyph set used for the grid.
    pub border: BorderStyle,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            cell_centred: false,
            cell_max_width: 0,
            table_left_pad: DEFAULT_LEFT_PAD,
            sort_columns: true,
            sort_rows: true,
            border: BorderStyle::Heavy,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_centred(mut self, centred: bool) -> Self {
        self.cell_centred = centred;
        self
    }

    pub fn cell_max_width(mut self, width: usize) -> Self {
        self.cell_max_width = width;
        self
    }

    pub fn table_left_pad(mut self, pad: usize) -> Self {
        self.table_left_pad = pad;
        self
    }

    pub fn sort_columns(mut self, sort: bool) -> Self {
        self.sort_columns = sort;
        self
    }

    pub fn sort_rows(mut self, sort: bool) -> Self {
        self.sort_rows = sort;
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// The configured width limit, if any.
    pub fn max_width(&self) -> Option<usize> {
        (self.cell_max_width > 0).then_some(self.cell_max_width)
    }
}
