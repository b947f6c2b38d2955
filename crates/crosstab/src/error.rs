//! Error types for table rendering.

use std::fmt;

use thiserror::Error;

/// The two axes of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Row headings, taken from [`TableItem::row_value`](crate::TableItem::row_value).
    Row,
    /// Column headings, taken from [`TableItem::column_value`](crate::TableItem::column_value).
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors produced while building or printing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// No headings could be derived for an axis, usually because there are no items.
    #[error("no {axis} headings, cannot render table")]
    EmptyHeadings { axis: Axis },

    /// An item's column value is missing from the derived column headings.
    ///
    /// Headings are derived from the same items that fill the grid, so this
    /// only happens when the item collection yields different items on
    /// successive iterations.
    #[error("column '{column}' is not among the derived column headings")]
    UnresolvableColumn { column: String },

    /// An item's row value is missing from the derived row headings.
    #[error("row '{row}' is not among the derived row headings")]
    UnresolvableRow { row: String },

    /// A style name that is not part of the [`Colour`](crate::Colour) vocabulary.
    #[error("unknown colour '{0}'")]
    UnknownColour(String),

    /// A border style name that is not recognised.
    #[error("unknown border style '{0}'")]
    UnknownBorder(String),

    /// Writing the rendered table failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_headings_display() {
        let err = TableError::EmptyHeadings { axis: Axis::Column };
        assert_eq!(err.to_string(), "no column headings, cannot render table");
    }

    #[test]
    fn test_unresolvable_column_display() {
        let err = TableError::UnresolvableColumn {
            column: "COL9".to_string(),
        };
        assert!(err.to_string().contains("COL9"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
    }
}
