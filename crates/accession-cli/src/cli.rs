//! CLI argument definitions.
//!
//! Every path defaults to the file names the collection's batch jobs have
//! always used, so running a subcommand bare inside the working folder
//! reproduces a routine run.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

pub const DEFAULT_ACCESSION_LIST: &str =
    "MS381_JayKayKlein_AccessionLists - Photographic Material.csv";
pub const DEFAULT_ASSIGNED_LIST: &str =
    "MS381_JayKayKlein_AccessionLists - Photographic Material - New IDs.csv";
pub const DEFAULT_BOX_SHEET_DIR: &str = "box_lists";
pub const DEFAULT_MAPPING: &str = "Klein metadata mapping - Mapping.csv";
pub const DEFAULT_FIXED_VALUES: &str = "Klein metadata mapping - Fixed values.csv";
pub const DEFAULT_TEMPLATE: &str = "Nuxeo Spreadsheet Template - Template.csv";

#[derive(Parser)]
#[command(
    name = "accession-tools",
    version,
    about = "Batch jobs for archival accession lists",
    long_about = "Assign local identifiers to accession list negatives, split them into\n\
                  per-box digitization worksheets, and map them into ingest metadata\n\
                  spreadsheets."
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

    /// Collection settings as JSON (defaults to the MS381 collection).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assign local identifiers to negatives not digitized in the pilot.
    AssignIds(AssignIdsArgs),

    /// Write one digitization worksheet per box.
    BoxSheets(BoxSheetsArgs),

    /// Write one ingest metadata spreadsheet per box.
    Metadata(MetadataArgs),

    /// Print the normalized place heading for a city, state and country.
    Places(PlacesArgs),
}

#[derive(Args)]
pub struct AssignIdsArgs {
    /// Accession list CSV.
    #[arg(value_name = "INPUT", default_value = DEFAULT_ACCESSION_LIST)]
    pub input: PathBuf,

    /// Where to write the accession list with identifiers.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_ASSIGNED_LIST)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct BoxSheetsArgs {
    /// Accession list CSV written by `assign-ids`.
    #[arg(value_name = "INPUT", default_value = DEFAULT_ASSIGNED_LIST)]
    pub input: PathBuf,

    /// Directory for the per-box worksheets.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_BOX_SHEET_DIR)]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct MetadataArgs {
    /// Accession list CSV written by `assign-ids`.
    #[arg(value_name = "INPUT", default_value = DEFAULT_ASSIGNED_LIST)]
    pub input: PathBuf,

    /// Field mapping CSV.
    #[arg(long = "mapping", value_name = "PATH", default_value = DEFAULT_MAPPING)]
    pub mapping: PathBuf,

    /// Fixed values CSV.
    #[arg(long = "fixed-values", value_name = "PATH", default_value = DEFAULT_FIXED_VALUES)]
    pub fixed_values: PathBuf,

    /// Header-only spreadsheet template CSV.
    #[arg(long = "template", value_name = "PATH", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Directory for the per-box metadata spreadsheets.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Only build the spreadsheet for this box.
    #[arg(long = "box", value_name = "N")]
    pub box_number: Option<u32>,
}

#[derive(Args)]
pub struct PlacesArgs {
    pub city: String,
    pub state: String,
    pub country: String,
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
