//! CLI argument definitions for the folding guide tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use zine_model::{Duplex, Orientation, SelectionState, Spine, ZineSize};

#[derive(Parser)]
#[command(
    name = "zine-fold",
    version,
    about = "Zine folding guide - map zine options to specification codes",
    long_about = "Map zine folding options to compact specification codes and back.\n\n\
                  Codes select one block of folding instructions and can be shared\n\
                  as a query string (e.g. ?e2ps)."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode a set of options into a specification code.
    Encode(EncodeArgs),

    /// Decode a specification code into options.
    Decode(DecodeArgs),

    /// Show the instruction block a page would display at startup.
    Show(ShowArgs),

    /// List every reachable specification code.
    Codes(CatalogArgs),

    /// Report reachable codes that have no instruction block.
    Check(CheckArgs),

    /// Print the shareable query string for a code.
    Share(ShareArgs),
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Zine size.
    #[arg(long = "size", value_enum, default_value = "quarter")]
    pub size: SizeArg,

    /// Duplex mode (ignored for half size).
    #[arg(long = "duplex", value_enum, default_value = "single")]
    pub duplex: DuplexArg,

    /// Page orientation.
    #[arg(long = "orientation", value_enum, default_value = "portrait")]
    pub orientation: OrientationArg,

    /// Spine position (ignored for half size).
    #[arg(long = "spine", value_enum, default_value = "top")]
    pub spine: SpineArg,
}

impl EncodeArgs {
    pub fn selection(&self) -> SelectionState {
        SelectionState::new(
            self.size.into(),
            self.duplex.into(),
            self.orientation.into(),
            self.spine.into(),
        )
    }
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Code to decode. Malformed input is decoded leniently.
    #[arg(value_name = "CODE", allow_hyphen_values = true)]
    pub code: String,

    /// Code describing the selection before decoding (default: q1pt).
    #[arg(long = "from", value_name = "CODE")]
    pub from: Option<String>,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// TOML instruction catalog (default: built-in placeholder blocks).
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Startup query string, with or without the leading '?'.
    #[arg(value_name = "QUERY", allow_hyphen_values = true)]
    pub query: Option<String>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// TOML instruction catalog to check.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: PathBuf,
}

#[derive(Parser)]
pub struct ShareArgs {
    /// Code to share. It is decoded and re-encoded first.
    #[arg(value_name = "CODE", allow_hyphen_values = true)]
    pub code: String,

    /// Page URL to prefix the query with.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SizeArg {
    Eighth,
    Quarter,
    Half,
}

impl From<SizeArg> for ZineSize {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Eighth => ZineSize::Eighth,
            SizeArg::Quarter => ZineSize::Quarter,
            SizeArg::Half => ZineSize::Half,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DuplexArg {
    Single,
    Double,
}

impl From<DuplexArg> for Duplex {
    fn from(arg: DuplexArg) -> Self {
        match arg {
            DuplexArg::Single => Duplex::Single,
            DuplexArg::Double => Duplex::Double,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SpineArg {
    Side,
    Top,
}

impl From<SpineArg> for Spine {
    fn from(arg: SpineArg) -> Self {
        match arg {
            SpineArg::Side => Spine::Side,
            SpineArg::Top => Spine::Top,
        }
    }
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
