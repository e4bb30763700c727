//! CLI argument definitions for tabmap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabmap",
    version,
    about = "Reorder tab-separated data with a column mapping",
    long_about = "Project tab-separated records into a target column layout and back.\n\n\
                  A mapping names, for each output column, the 1-based field of the \
                  source record it is read from."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the mapping definition.
    Show(ShowArgs),

    /// Map records into the output layout.
    Project(ProjectArgs),

    /// Map an edited output grid back into the source layout.
    Reverse(ReverseArgs),

    /// List the distinct values of one output column.
    Values(ValuesArgs),

    /// Report import statistics without projecting.
    Stats(StatsArgs),
}

/// Where to read the mapping definition from.
#[derive(Args)]
pub struct MappingArgs {
    /// Mapping definition file: JSON for `.json`, mapping text otherwise.
    #[arg(
        long = "mapping",
        value_name = "PATH",
        conflicts_with = "templates",
        required_unless_present = "templates"
    )]
    pub mapping: Option<PathBuf>,

    /// Template store document.
    #[arg(long = "templates", value_name = "STORE", requires = "template")]
    pub templates: Option<PathBuf>,

    /// Template identifier within the store.
    #[arg(long = "template", value_name = "ID", requires = "templates")]
    pub template: Option<String>,
}

/// Guard limits and header handling for imported text.
#[derive(Args)]
pub struct ImportArgs {
    /// Treat the first line of the input as a header and drop it.
    #[arg(long = "skip-header")]
    pub skip_header: bool,

    /// Size limits to enforce.
    #[arg(long = "limits", value_enum, default_value = "file")]
    pub limits: LimitsArg,

    /// Keep the first rows instead of rejecting input over the row limit.
    #[arg(long = "truncate")]
    pub truncate: bool,
}

/// Row filters on raw fields.
#[derive(Args)]
pub struct FilterArgs {
    /// Text filter: N=VALUE, N~VALUE (contains), N!=VALUE, N!~VALUE.
    ///
    /// N is the 1-based output column. The value `空白` matches empty fields.
    #[arg(long = "filter", value_name = "SPEC")]
    pub filters: Vec<String>,

    /// Value-set filter: N=a,b,c keeps rows whose field is one of the values.
    #[arg(long = "select", value_name = "SPEC")]
    pub selections: Vec<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,

    /// How to print the definition.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ShowFormatArg,
}

#[derive(Parser)]
pub struct ProjectArgs {
    /// Tab-separated input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub mapping: MappingArgs,

    #[command(flatten)]
    pub import: ImportArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Write the projected rows back in the source layout.
    #[arg(long = "reverse")]
    pub reverse: bool,

    /// Prepend a header line in this language.
    #[arg(long = "header", value_enum, value_name = "LANGUAGE")]
    pub header: Option<LanguageArg>,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ReverseArgs {
    /// Edited output grid, tab-separated.
    #[arg(value_name = "EDITED")]
    pub edited: PathBuf,

    #[command(flatten)]
    pub mapping: MappingArgs,

    #[command(flatten)]
    pub import: ImportArgs,

    /// Prepend a header line in this language.
    #[arg(long = "header", value_enum, value_name = "LANGUAGE")]
    pub header: Option<LanguageArg>,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValuesArgs {
    /// Tab-separated input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub mapping: MappingArgs,

    #[command(flatten)]
    pub import: ImportArgs,

    /// 1-based output column.
    #[arg(long = "column", value_name = "N")]
    pub column: usize,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Tab-separated input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub mapping: MappingArgs,

    #[command(flatten)]
    pub import: ImportArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print statistics as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LimitsArg {
    /// 1000 rows, 1000000 characters.
    Paste,
    /// 5000 rows, 5000000 characters.
    File,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShowFormatArg {
    Table,
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
