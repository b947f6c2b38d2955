//! # Crosstab - Box-Drawn Tables from Tagged Items
//!
//! `crosstab` lays out a collection of items as a fixed-width grid for the
//! terminal. Each item says which column and which row it belongs to and what
//! text to show there; the crate works out the headings, one shared column
//! width and ANSI-aware padding, then draws the borders.
//!
//! ## Core Concepts
//!
//! - [`TableItem`]: the three accessors an item implements
//! - [`CellWidth`]: visible width of an item's cell, style escapes discounted
//! - [`Table`]: renders items to text ([`Table::render`]) or to a nested
//!   mapping ([`Table::render_as_mapping`])
//! - [`TableConfig`]: alignment, truncation, padding, sorting and border style
//! - [`Colour`]: named ANSI styles to embed in cell text
//!
//! ## Quick Start
//!
//! ```rust
//! use crosstab::{Colour, Table, TableConfig, TableItem};
//!
//! struct Check {
//!     host: &'static str,
//!     kind: &'static str,
//!     healthy: bool,
//! }
//!
//! impl TableItem for Check {
//!     fn column_value(&self) -> String {
//!         self.host.to_string()
//!     }
//!
//!     fn row_value(&self) -> String {
//!         self.kind.to_string()
//!     }
//!
//!     fn cell_value(&self) -> String {
//!         if self.healthy {
//!             Colour::Green.paint("ok")
//!         } else {
//!             Colour::Red.paint("down")
//!         }
//!     }
//! }
//!
//! let checks = [
//!     Check { host: "web-1", kind: "http", healthy: true },
//!     Check { host: "web-2", kind: "http", healthy: false },
//!     Check { host: "web-1", kind: "disk", healthy: true },
//! ];
//!
//! let table = Table::new(&checks, TableConfig::new().cell_centred(true));
//! let output = table.render().unwrap();
//! assert_eq!(output.lines().count(), 6);
//! ```
//!
//! A (row, column) pair that no item fills, such as `disk` on `web-2` above,
//! is drawn with a red `x` so it can't be mistaken for an empty value.
//!
//! ## Errors
//!
//! Rendering an empty collection fails with [`TableError::EmptyHeadings`];
//! nothing partial is ever returned. Failures are also logged through
//! `tracing`.

mod colour;
mod config;
mod error;
mod item;
pub mod table;
mod util;

pub use colour::{reset, Colour};
pub use config::{TableConfig, DEFAULT_LEFT_PAD};
pub use error::{Axis, Result, TableError};
pub use item::{CellWidth, Entry, TableItem};
pub use table::{derive_headings, BorderStyle, Table, TableMapping, ABSENT_MARKER};
pub use util::{
    pad_styled, strip_style_escapes, truncate_chars, truncate_visible, visible_width,
};
