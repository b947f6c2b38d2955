//! Command-line arguments and how they combine with a config file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crosstab::{BorderStyle, Colour, TableConfig};

/// Render column,row,cell records as a box-drawn table.
#[derive(Debug, Parser)]
#[command(name = "crosstab", version, about)]
pub struct Cli {
    /// Input file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Input format. Guessed from the file extension, defaulting to CSV.
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// What to produce.
    #[arg(short, long, value_enum, default_value_t = OutputMode::Table)]
    pub output: OutputMode,

    /// Write the table to stdout instead of stderr.
    #[arg(long)]
    pub stdout: bool,

    /// Layout config file (YAML or JSON). Flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Centre cell text.
    #[arg(long)]
    pub centred: bool,

    /// Truncate cells to this many characters (0 for no limit).
    #[arg(long)]
    pub max_width: Option<usize>,

    /// Extra width reserved left of the row labels.
    #[arg(long)]
    pub left_pad: Option<usize>,

    /// Keep columns in first-seen order.
    #[arg(long)]
    pub no_sort_columns: bool,

    /// Keep rows in first-seen order.
    #[arg(long)]
    pub no_sort_rows: bool,

    /// Border style: heavy, light, double, rounded or ascii.
    #[arg(long)]
    pub border: Option<BorderStyle>,

    /// Paint every table cell with a named colour, e.g. `bold_green`.
    #[arg(long)]
    pub highlight: Option<Colour>,

    /// Log more (repeat for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Table,
    Json,
    Yaml,
}

impl Cli {
    /// The input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }

    pub fn input_format(&self) -> InputFormat {
        self.format
            .or_else(|| self.input_path().and_then(InputFormat::from_path))
            .unwrap_or(InputFormat::Csv)
    }

    /// The config file (if any) with command-line flags applied on top.
    pub fn table_config(&self) -> Result<TableConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => TableConfig::default(),
        };

        if self.centred {
            config.cell_centred = true;
        }
        if let Some(width) = self.max_width {
            config.cell_max_width = width;
        }
        if let Some(pad) = self.left_pad {
            config.table_left_pad = pad;
        }
        if self.no_sort_columns {
            config.sort_columns = false;
        }
        if self.no_sort_rows {
            config.sort_rows = false;
        }
        if let Some(border) = self.border {
            config.border = border;
        }
        Ok(config)
    }
}

/// Reads a [`TableConfig`] from a YAML or JSON file.
pub fn load_config(path: &Path) -> Result<TableConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let config = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON config {}", path.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML config {}", path.display()))?,
        _ => bail!(
            "unsupported config file {}, expected .yaml, .yml or .json",
            path.display()
        ),
    };
    tracing::debug!(path = %path.display(), ?config, "loaded table config");
    Ok(config)
}
