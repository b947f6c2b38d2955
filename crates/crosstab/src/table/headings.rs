//! Heading derivation shared by every render path.

use std::collections::HashSet;

use crate::error::{Axis, Result, TableError};
use crate::item::TableItem;

impl Axis {
    /// Reads this axis' value from `item`.
    pub fn value_of<T: TableItem + ?Sized>(self, item: &T) -> String {
        match self {
            Axis::Row => item.row_value(),
            Axis::Column => item.column_value(),
        }
    }
}

/// Collects the distinct values `items` have on `axis`.
///
/// Values keep the order in which they are first seen unless `sort` is set,
/// in which case they are sorted lexicographically. An empty result is an
/// error: there is nothing to lay out along that axis.
pub fn derive_headings<I>(items: I, axis: Axis, sort: bool) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: TableItem,
{
    let mut seen = HashSet::new();
    let mut headings = Vec::new();
    for item in items {
        let value = axis.value_of(&item);
        if !seen.contains(&value) {
            seen.insert(value.clone());
            headings.push(value);
        }
    }

    if headings.is_empty() {
        tracing::error!("no {} headings", axis);
        return Err(TableError::EmptyHeadings { axis });
    }

    if sort {
        headings.sort();
    }
    Ok(headings)
}
