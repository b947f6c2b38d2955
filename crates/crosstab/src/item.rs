//! The contract every renderable item satisfies.
//!
//! An item names the column and row it belongs to and the text that goes in
//! that intersection. The table derives everything else (headings, widths,
//! padding) from those three values.
//!
//! # Example
//!
//! ```rust
//! use crosstab::{CellWidth, TableItem};
//!
//! struct Deployment {
//!     region: String,
//!     service: String,
//!     version: String,
//! }
//!
//! impl TableItem for Deployment {
//!     fn column_value(&self) -> String {
//!         self.region.clone()
//!     }
//!
//!     fn row_value(&self) -> String {
//!         self.service.clone()
//!     }
//!
//!     fn cell_value(&self) -> String {
//!         self.version.clone()
//!     }
//! }
//!
//! let item = Deployment {
//!     region: "eu-west-1".into(),
//!     service: "billing".into(),
//!     version: "1.4.2".into(),
//! };
//! assert_eq!(item.cell_width(), 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::util::visible_width;

/// A value that can be placed in a table.
///
/// Implementations should be pure: the table calls each accessor more than
/// once per render and expects the same answer every time.
pub trait TableItem {
    /// The column (X axis) this item belongs to.
    fn column_value(&self) -> String;

    /// The row (Y axis) this item belongs to.
    fn row_value(&self) -> String;

    /// The text rendered in the cell. May contain style escapes.
    fn cell_value(&self) -> String;
}

/// Visible width of an item's cell text.
///
/// This is implemented for every [`TableItem`] and cannot be overridden, so
/// the width is always the length of [`TableItem::cell_value`] with style
/// escapes removed.
pub trait CellWidth {
    /// Number of terminal columns the cell text occupies.
    fn cell_width(&self) -> usize;
}

impl<T: TableItem + ?Sized> CellWidth for T {
    fn cell_width(&self) -> usize {
        visible_width(&self.cell_value())
    }
}

impl<T: TableItem + ?Sized> TableItem for &T {
    fn column_value(&self) -> String {
        (**self).column_value()
    }

    fn row_value(&self) -> String {
        (**self).row_value()
    }

    fn cell_value(&self) -> String {
        (**self).cell_value()
    }
}

impl<T: TableItem + ?Sized> TableItem for Box<T> {
    fn column_value(&self) -> String {
        (**self).column_value()
    }

    fn row_value(&self) -> String {
        (**self).row_value()
    }

    fn cell_value(&self) -> String {
        (**self).cell_value()
    }
}

/// A plain owned item, for callers that don't have a type of their own.
///
/// Deserializes from records with `column`, `row` and `cell` fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub column: String,
    pub row: String,
    #[serde(default)]
    pub cell: String,
}

impl Entry {
    pub fn new(
        column: impl Into<String>,
        row: impl Into<String>,
        cell: impl Into<String>,
    ) -> Self {
        Entry {
            column: column.into(),
            row: row.into(),
            cell: cell.into(),
        }
    }
}

impl TableItem for Entry {
    fn column_value(&self) -> String {
        self.column.clone()
    }

    fn row_value(&self) -> String {
        self.row.clone()
    }

    fn cell_value(&self) -> String {
        self.cell.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Colour;

    #[test]
    fn test_cell_width() {
        let item = Entry::new("COL0", "ROW0", "TEST");
        assert_eq!(item.cell_width(), 4);
    }

    #[test]
    fn test_cell_width_with_colour() {
        let item = Entry::new("COL0", "ROW0", Colour::Red.paint("CELL0"));
        assert_eq!(item.cell_width(), 5);
    }

    #[test]
    fn test_cell_width_follows_cell_value() {
        let mut item = Entry::new("COL0", "ROW0", "ab");
        assert_eq!(item.cell_width(), 2);
        item.cell = "abcd".to_string();
        assert_eq!(item.cell_width(), 4);
    }

    #[test]
    fn test_reference_and_box_delegate() {
        let item = Entry::new("COL0", "ROW0", "x");
        let by_ref = &item;
        let boxed: Box<dyn TableItem> = Box::new(item.clone());
        assert_eq!(by_ref.column_value(), "COL0");
        assert_eq!(boxed.row_value(), "ROW0");
        assert_eq!(boxed.cell_width(), 1);
    }

    #[test]
    fn test_entry_deserializes_without_cell() {
        let entry: Entry = serde_json::from_str(r#"{"column": "c", "row": "r"}"#).unwrap();
        assert_eq!(entry, Entry::new("c", "r", ""));
    }
}
