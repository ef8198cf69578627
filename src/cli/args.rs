use crate::processors::TieBreak;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "current-rose")]
#[command(about = "Current rose with directional extreme bars and annual maxima")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the current rose tables, coordinate series and chart
    Generate(GenerateArgs),

    /// Parse the pasted data and report kept and skipped lines
    Validate {
        #[arg(short, long, help = "Current data file ('-' for stdin)")]
        current: Option<PathBuf>,

        #[arg(short, long, help = "Extreme data file")]
        extreme: Option<PathBuf>,
    },

    /// Show the compass table and the bearings each sector covers
    Sectors,
}

/// Flags of the `generate` subcommand. Unset flags fall back to the settings.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[arg(
        short,
        long,
        help = "Current data, one 'speed<TAB>direction(deg)' per line ('-' for stdin)"
    )]
    pub current: PathBuf,

    #[arg(short, long, help = "Extreme data, one 'DIR<TAB>speed' per line")]
    pub extreme: Option<PathBuf>,

    #[arg(short, long, help = "Start time (dd-mm-yyyy hh:mm) [default: 01-01-2025 00:00]")]
    pub start_time: Option<String>,

    #[arg(long, help = "Add 1 day to the step between readings")]
    pub day: Option<bool>,

    #[arg(long, help = "Add 1 hour to the step between readings [default: true]")]
    pub hour: Option<bool>,

    #[arg(long, help = "Add 1 minute to the step between readings")]
    pub minute: Option<bool>,

    #[arg(long, help = "Add 1 second to the step between readings")]
    pub second: Option<bool>,

    #[arg(long, help = "Sector boundary rule: counter-clockwise, half-up or half-even")]
    pub tie_break: Option<TieBreak>,

    #[arg(
        short,
        long,
        help = "Output directory [default: output/current-rose-{YYMMDD}]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Table delimiter: comma, tab or semicolon")]
    pub delimiter: Option<String>,

    #[arg(long, default_value = "false")]
    pub no_chart: bool,

    #[arg(long, help = "Chart width in pixels (200 to 16384)")]
    pub chart_size: Option<u32>,

    #[arg(long, default_value = "false", help = "Also print the three tables")]
    pub print_tables: bool,
}
