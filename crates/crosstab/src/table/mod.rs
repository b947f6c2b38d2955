//! The table layout engine.
//!
//! A [`Table`] turns a collection of [`TableItem`]s into a cross-tabulation:
//! every distinct column value becomes a column, every distinct row value a
//! row, and each item's cell text lands at its (row, column) intersection.
//!
//! ```rust
//! use crosstab::{Entry, Table, TableConfig};
//!
//! let items = vec![
//!     Entry::new("COL0", "ROW0", "0,0"),
//!     Entry::new("COL0", "ROW1", "0,1"),
//!     Entry::new("COL1", "ROW0", "1,0"),
//!     Entry::new("COL1", "ROW1", "1,1"),
//! ];
//!
//! let table = Table::new(&items, TableConfig::new().table_left_pad(0));
//! let expected = concat!(
//!     "     ┏━━━━┳━━━━┓\n",
//!     "     ┃COL0┃COL1┃\n",
//!     "     ┣━━━━╋━━━━┫\n",
//!     "ROW0 ┃0,0 ┃1,0 ┃\n",
//!     "ROW1 ┃0,1 ┃1,1 ┃\n",
//!     "     ┗━━━━┻━━━━┛\n",
//! );
//! assert_eq!(table.render().unwrap(), expected);
//! ```
//!
//! # Layout rules
//!
//! - All columns share one width: the widest visible cell or column heading,
//!   capped by [`TableConfig::cell_max_width`] when that is non-zero.
//! - The row label column is as wide as the longest row heading plus
//!   [`TableConfig::table_left_pad`], and labels are right-aligned.
//! - A cell no item maps to shows a red `x`. A cell whose item has empty
//!   text stays blank.
//! - When two items share a (row, column) pair the later one wins.

mod decorator;
mod headings;

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use indexmap::IndexMap;

use crate::colour::Colour;
use crate::config::TableConfig;
use crate::error::{Axis, Result, TableError};
use crate::item::{CellWidth, TableItem};
use crate::util::{pad_styled, truncate_chars};

use decorator::LineType;

pub use decorator::BorderStyle;
pub use headings::derive_headings;

/// Text shown in a cell that no item produced.
pub const ABSENT_MARKER: &str = "x";

/// Structured table output: row heading to column heading to cell text.
///
/// Rows keep heading order; columns are sorted.
pub type TableMapping = IndexMap<String, BTreeMap<String, String>>;

type Cells = Vec<Vec<Option<String>>>;

/// A renderable view over a collection of items.
///
/// The collection is borrowed or cloned, never modified, and iterated once
/// per pass, so it must be cheap to clone: `&[T]` and `&Vec<T>` are typical.
#[derive(Clone, Debug)]
pub struct Table<I> {
    items: I,
    config: TableConfig,
}

impl<I> Table<I>
where
    I: IntoIterator + Clone,
    I::Item: TableItem,
{
    pub fn new(items: I, config: TableConfig) -> Self {
        Table { items, config }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Row headings in display order.
    pub fn row_headings(&self) -> Result<Vec<String>> {
        derive_headings(self.items.clone(), Axis::Row, self.config.sort_rows)
    }

    /// Column headings in display order.
    pub fn column_headings(&self) -> Result<Vec<String>> {
        derive_headings(self.items.clone(), Axis::Column, self.config.sort_columns)
    }

    fn headings(&self) -> Result<(Vec<String>, Vec<String>)> {
        match (self.row_headings(), self.column_headings()) {
            (Ok(rows), Ok(columns)) => Ok((rows, columns)),
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!("failed to generate row or column headings, cannot render table");
                Err(err)
            }
        }
    }

    /// The width every column is padded to.
    pub fn column_width(&self) -> Result<usize> {
        let columns = self.column_headings()?;
        Ok(self.shared_width(&columns))
    }

    fn shared_width(&self, column_headings: &[String]) -> usize {
        let natural = self
            .items
            .clone()
            .into_iter()
            .map(|item| item.cell_width())
            .chain(column_headings.iter().map(|h| h.chars().count()))
            .max()
            .unwrap_or(0);

        match self.config.max_width() {
            Some(limit) => natural.min(limit),
            None => natural,
        }
    }

    fn cells(&self, rows: &[String], columns: &[String]) -> Result<Cells> {
        let row_index: HashMap<&str, usize> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.as_str(), i))
            .collect();
        let column_index: HashMap<&str, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| (column.as_str(), i))
            .collect();

        let mut cells: Cells = vec![vec![None; columns.len()]; rows.len()];
        for item in self.items.clone() {
            let column = item.column_value();
            let Some(&c) = column_index.get(column.as_str()) else {
                return Err(TableError::UnresolvableColumn { column });
            };
            let row = item.row_value();
            let Some(&r) = row_index.get(row.as_str()) else {
                return Err(TableError::UnresolvableRow { row });
            };

            let value = item.cell_value();
            cells[r][c] = Some(match self.config.max_width() {
                Some(limit) => truncate_chars(&value, limit).to_string(),
                None => value,
            });
        }
        Ok(cells)
    }

    /// Renders the table as individual lines, without line terminators.
    pub fn render_lines(&self) -> Result<Vec<String>> {
        let (rows, columns) = self.headings()?;
        let cells = self.cells(&rows, &columns)?;

        let width = self.shared_width(&columns);
        let label_width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
            + self.config.table_left_pad;
        let chars = self.config.border.chars();
        let blank_label = " ".repeat(label_width);
        let absent = pad_styled(&Colour::Red.paint(ABSENT_MARKER), width, true);

        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(format!(
            "{} {}",
            blank_label,
            chars.rule(LineType::Top, columns.len(), width)
        ));

        let heading_cells: Vec<String> = columns
            .iter()
            .map(|heading| format!("{:^width$}", heading))
            .collect();
        lines.push(format!("{} {}", blank_label, chars.row(&heading_cells)));

        lines.push(format!(
            "{} {}",
            blank_label,
            chars.rule(LineType::Middle, columns.len(), width)
        ));

        for (row, row_cells) in rows.iter().zip(&cells) {
            let padded: Vec<String> = row_cells
                .iter()
                .map(|cell| match cell {
                    Some(text) => pad_styled(text, width, self.config.cell_centred),
                    None => absent.clone(),
                })
                .collect();
            lines.push(format!("{:>label_width$} {}", row, chars.row(&padded)));
        }

        lines.push(format!(
            "{} {}",
            blank_label,
            chars.rule(LineType::Bottom, columns.len(), width)
        ));

        tracing::debug!(
            rows = rows.len(),
            columns = columns.len(),
            column_width = width,
            "rendered table"
        );
        Ok(lines)
    }

    /// Renders the table as one string, ending with a newline.
    pub fn render(&self) -> Result<String> {
        let mut output = self.render_lines()?.join("\n");
        output.push('\n');
        Ok(output)
    }

    /// Builds a mapping of row heading to column heading to cell text.
    ///
    /// Every (row, column) pair is present, seeded with an empty string.
    /// Cell text is never truncated here.
    pub fn render_as_mapping(&self) -> Result<TableMapping> {
        let (rows, columns) = self.headings()?;

        let seed: BTreeMap<String, String> = columns
            .into_iter()
            .map(|column| (column, String::new()))
            .collect();
        let mut mapping: TableMapping = rows
            .into_iter()
            .map(|row| (row, seed.clone()))
            .collect();

        for item in self.items.clone() {
            let row = item.row_value();
            let Some(row_cells) = mapping.get_mut(&row) else {
                return Err(TableError::UnresolvableRow { row });
            };
            let column = item.column_value();
            let Some(slot) = row_cells.get_mut(&column) else {
                return Err(TableError::UnresolvableColumn { column });
            };
            *slot = item.cell_value();
        }
        Ok(mapping)
    }

    /// Writes the rendered table followed by a blank line.
    ///
    /// Nothing is written if the table cannot be rendered.
    pub fn print_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let rendered = self.render()?;
        writeln!(writer, "{}", rendered)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the rendered table to stderr.
    pub fn eprint(&self) -> Result<()> {
        self.print_to(&mut std::io::stderr().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entry;
    use std::cell::Cell;
    use std::rc::Rc;

    fn grid() -> Vec<Entry> {
        vec![
            Entry::new("COL0", "ROW0", "0,0"),
            Entry::new("COL0", "ROW1", "0,1"),
            Entry::new("COL1", "ROW0", "1,0"),
            Entry::new("COL1", "ROW1", "1,1"),
        ]
    }

    #[test]
    fn test_column_width_from_headings() {
        let items = grid();
        let table = Table::new(&items, TableConfig::default());
        assert_eq!(table.column_width().unwrap(), 4);
    }

    #[test]
    fn test_column_width_from_cells_ignores_escapes() {
        let items = vec![Entry::new("C", "R", Colour::Red.paint("abcdef"))];
        let table = Table::new(&items, TableConfig::default());
        assert_eq!(table.column_width().unwrap(), 6);
    }

    #[test]
    fn test_column_width_capped() {
        let items = vec![Entry::new("COLUMN", "R", "abcdef")];
        let table = Table::new(&items, TableConfig::new().cell_max_width(2));
        assert_eq!(table.column_width().unwrap(), 2);
    }

    #[test]
    fn test_cells_mark_absent_and_keep_explicit_empty() {
        let items = vec![
            Entry::new("COL0", "ROW0", ""),
            Entry::new("COL1", "ROW1", "v"),
        ];
        let table = Table::new(&items, TableConfig::default());
        let rows = table.row_headings().unwrap();
        let columns = table.column_headings().unwrap();
        let cells = table.cells(&rows, &columns).unwrap();
        assert_eq!(cells[0][0], Some(String::new()));
        assert_eq!(cells[0][1], None);
        assert_eq!(cells[1][0], None);
        assert_eq!(cells[1][1], Some("v".to_string()));
    }

    #[test]
    fn test_cells_last_write_wins() {
        let items = vec![
            Entry::new("COL0", "ROW0", "first"),
            Entry::new("COL0", "ROW0", "second"),
        ];
        let table = Table::new(&items, TableConfig::default());
        let mapping = table.render_as_mapping().unwrap();
        assert_eq!(mapping["ROW0"]["COL0"], "second");
        let rendered = table.render().unwrap();
        assert!(rendered.contains("second"));
        assert!(!rendered.contains("first"));
    }

    #[test]
    fn test_cells_reject_unknown_column() {
        let items = grid();
        let table = Table::new(&items, TableConfig::default());
        let rows = table.row_headings().unwrap();
        let err = table.cells(&rows, &["COL0".to_string()]).unwrap_err();
        assert!(matches!(err, TableError::UnresolvableColumn { column } if column == "COL1"));
    }

    #[test]
    fn test_cells_reject_unknown_row() {
        let items = grid();
        let table = Table::new(&items, TableConfig::default());
        let columns = table.column_headings().unwrap();
        let err = table.cells(&["ROW0".to_string()], &columns).unwrap_err();
        assert!(matches!(err, TableError::UnresolvableRow { row } if row == "ROW1"));
    }

    /// Yields one stable item for the first `stable` passes, then `late`.
    #[derive(Clone)]
    struct Drifting {
        passes: Rc<Cell<usize>>,
        stable: usize,
        late: Entry,
    }

    impl Drifting {
        fn new(stable: usize, late: Entry) -> Self {
            Drifting {
                passes: Rc::new(Cell::new(0)),
                stable,
                late,
            }
        }
    }

    impl IntoIterator for Drifting {
        type Item = Entry;
        type IntoIter = std::vec::IntoIter<Entry>;

        fn into_iter(self) -> Self::IntoIter {
            let pass = self.passes.get();
            self.passes.set(pass + 1);
            if pass < self.stable {
                vec![Entry::new("COL0", "ROW0", "a")].into_iter()
            } else {
                vec![self.late].into_iter()
            }
        }
    }

    #[test]
    fn test_mapping_rejects_row_that_appears_late() {
        // Two heading passes see ROW0, the fill pass sees ROW9.
        let items = Drifting::new(2, Entry::new("COL0", "ROW9", "z"));
        let err = Table::new(items, TableConfig::default())
            .render_as_mapping()
            .unwrap_err();
        assert!(matches!(err, TableError::UnresolvableRow { row } if row == "ROW9"));
    }

    #[test]
    fn test_mapping_rejects_column_that_appears_late() {
        let items = Drifting::new(2, Entry::new("COL9", "ROW0", "z"));
        let err = Table::new(items, TableConfig::default())
            .render_as_mapping()
            .unwrap_err();
        assert!(matches!(err, TableError::UnresolvableColumn { column } if column == "COL9"));
    }

    #[test]
    fn test_render_rejects_column_that_appears_late() {
        let items = Drifting::new(2, Entry::new("COL9", "ROW0", "z"));
        let err = Table::new(items, TableConfig::default())
            .render()
            .unwrap_err();
        assert!(matches!(err, TableError::UnresolvableColumn { .. }));
    }

    #[test]
    fn test_render_lines_count() {
        let items = grid();
        let table = Table::new(&items, TableConfig::default());
        // top, heading, separator, two rows, bottom
        assert_eq!(table.render_lines().unwrap().len(), 6);
    }

    #[test]
    fn test_render_ends_with_single_newline() {
        let items = grid();
        let rendered = Table::new(&items, TableConfig::default()).render().unwrap();
        assert!(rendered.ends_with("┛\n"));
    }

    #[test]
    fn test_print_to_appends_blank_line() {
        let items = grid();
        let table = Table::new(&items, TableConfig::default());
        let mut out = Vec::new();
        table.print_to(&mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, format!("{}\n", table.render().unwrap()));
    }

    #[test]
    fn test_print_to_writes_nothing_on_failure() {
        let items: Vec<Entry> = Vec::new();
        let table = Table::new(&items, TableConfig::default());
        let mut out = Vec::new();
        assert!(table.print_to(&mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_owned_collection() {
        let table = Table::new(grid(), TableConfig::default());
        assert_eq!(table.row_headings().unwrap(), vec!["ROW0", "ROW1"]);
    }
}
