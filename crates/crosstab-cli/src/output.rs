//! Writing the table, or its mapping, to the chosen stream.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crosstab::{strip_style_escapes, truncate_visible, Colour, Entry, Table, TableConfig};

use crate::cli::{Cli, OutputMode};

/// Paints every cell with `colour`.
pub fn highlight(entries: Vec<Entry>, colour: Colour) -> Vec<Entry> {
    entries
        .into_iter()
        .map(|entry| Entry {
            cell: colour.paint(&entry.cell),
            ..entry
        })
        .collect()
}

/// Readies cells for a stream that does or doesn't show colour.
///
/// Without colour every escape is removed and nothing is painted, so the
/// table's own truncation only ever sees plain text. With colour, cells are
/// painted and then cut to the width limit by visible characters; the limit
/// is cleared from `config` so the table doesn't cut them again by raw
/// characters.
pub fn prepare_entries(
    entries: Vec<Entry>,
    highlight_with: Option<Colour>,
    config: &mut TableConfig,
    colours: bool,
) -> Vec<Entry> {
    if !colours {
        return entries
            .into_iter()
            .map(|entry| Entry {
                cell: strip_style_escapes(&entry.cell),
                ..entry
            })
            .collect();
    }

    let entries = match highlight_with {
        Some(colour) => highlight(entries, colour),
        None => entries,
    };
    match config.max_width() {
        Some(limit) => {
            config.cell_max_width = 0;
            entries
                .into_iter()
                .map(|entry| Entry {
                    cell: truncate_visible(&entry.cell, limit),
                    ..entry
                })
                .collect()
        }
        None => entries,
    }
}

/// Renders `entries` in the requested mode.
///
/// Tables go to stderr unless `--stdout` is given; structured output always
/// goes to stdout, unpainted.
pub fn emit(entries: Vec<Entry>, mut config: TableConfig, cli: &Cli) -> Result<()> {
    match cli.output {
        OutputMode::Table => {
            let colours = if cli.stdout {
                console::colors_enabled()
            } else {
                console::colors_enabled_stderr()
            };
            let entries = prepare_entries(entries, cli.highlight, &mut config, colours);
            let table = Table::new(entries.as_slice(), config);
            if cli.stdout {
                write_table(&table, &mut io::stdout().lock(), colours)
            } else {
                write_table(&table, &mut io::stderr().lock(), colours)
            }
        }
        OutputMode::Json => {
            let table = Table::new(entries.as_slice(), config);
            let mapping = table.render_as_mapping().context("cannot build table")?;
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &mapping)?;
            writeln!(stdout)?;
            Ok(())
        }
        OutputMode::Yaml => {
            let table = Table::new(entries.as_slice(), config);
            let mapping = table.render_as_mapping().context("cannot build table")?;
            let yaml = serde_yaml::to_string(&mapping)?;
            io::stdout().lock().write_all(yaml.as_bytes())?;
            Ok(())
        }
    }
}

/// Writes the rendered table and a trailing blank line.
///
/// Without colour the absent marker's escapes are stripped from the output;
/// cells were already stripped by [`prepare_entries`].
pub fn write_table<W: Write>(table: &Table<&[Entry]>, writer: &mut W, colours: bool) -> Result<()> {
    if colours {
        table.print_to(writer).context("cannot render table")?;
    } else {
        let rendered = table.render().context("cannot render table")?;
        writeln!(writer, "{}", strip_style_escapes(&rendered))?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        vec![Entry::new("A", "r", "1"), Entry::new("B", "s", "2")]
    }

    fn long_entries() -> Vec<Entry> {
        vec![Entry::new("A", "r", "abcdef"), Entry::new("B", "s", "ghijkl")]
    }

    fn render_prepared(
        entries: Vec<Entry>,
        highlight_with: Option<Colour>,
        mut config: TableConfig,
        colours: bool,
    ) -> String {
        let entries = prepare_entries(entries, highlight_with, &mut config, colours);
        let table = Table::new(entries.as_slice(), config);
        let mut out = Vec::new();
        write_table(&table, &mut out, colours).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_highlight_paints_cells_only() {
        let painted = highlight(entries(), Colour::Green);
        assert_eq!(painted[0].cell, "\x1b[32;20m1\x1b[0m");
        assert_eq!(painted[0].column, "A");
        assert_eq!(painted[0].row, "r");
    }

    #[test]
    fn test_highlight_with_max_width_without_colour() {
        let config = TableConfig::new().table_left_pad(0).cell_max_width(3);
        let written = render_prepared(long_entries(), Some(Colour::Red), config, false);
        let expected = concat!(
            "  ┏━━━┳━━━┓\n",
            "  ┃ A ┃ B ┃\n",
            "  ┣━━━╋━━━┫\n",
            "r ┃abc┃ x ┃\n",
            "s ┃ x ┃ghi┃\n",
            "  ┗━━━┻━━━┛\n",
            "\n",
        );
        assert_eq!(written, expected);
    }

    #[test]
    fn test_highlight_with_max_width_with_colour() {
        let config = TableConfig::new().table_left_pad(0).cell_max_width(3);
        let written = render_prepared(long_entries(), Some(Colour::Red), config, true);
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "  ┏━━━┳━━━┓");
        assert!(lines[3].starts_with(&format!("r ┃{}┃", Colour::Red.paint("abc"))));
        assert!(lines[4].ends_with(&format!("┃{}┃", Colour::Red.paint("ghi"))));
        assert_eq!(crosstab::visible_width(lines[3]), crosstab::visible_width(lines[0]));
    }

    #[test]
    fn test_prepare_without_colour_strips_input_escapes() {
        let mut config = TableConfig::new().cell_max_width(2);
        let styled = vec![Entry::new("A", "r", Colour::Bold.paint("xyz"))];
        let prepared = prepare_entries(styled, None, &mut config, false);
        assert_eq!(prepared[0].cell, "xyz");
        assert_eq!(config.cell_max_width, 2);
    }

    #[test]
    fn test_prepare_with_colour_moves_truncation_out_of_table() {
        let mut config = TableConfig::new().cell_max_width(2);
        let prepared = prepare_entries(long_entries(), Some(Colour::Green), &mut config, true);
        assert_eq!(prepared[0].cell, Colour::Green.paint("ab"));
        assert_eq!(config.cell_max_width, 0);
    }

    #[test]
    fn test_write_table_without_colour_strips_escapes() {
        let written = render_prepared(entries(), None, TableConfig::new().table_left_pad(0), false);
        assert!(!written.contains('\x1b'));
        // Absent cells keep their marker text.
        assert!(written.contains("r ┃1┃x┃"));
        assert!(written.ends_with("┛\n\n"));
    }

    #[test]
    fn test_write_table_with_colour_keeps_marker_style() {
        let written = render_prepared(entries(), None, TableConfig::default(), true);
        assert!(written.contains(&Colour::Red.paint("x")));
    }

    #[test]
    fn test_write_table_empty_fails_without_output() {
        let items: Vec<Entry> = Vec::new();
        let table = Table::new(items.as_slice(), TableConfig::default());
        let mut out = Vec::new();
        assert!(write_table(&table, &mut out, true).is_err());
        assert!(out.is_empty());
    }
}
