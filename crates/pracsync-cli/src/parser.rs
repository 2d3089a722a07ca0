//! Command-line arguments.

use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};
use pracsync_core::{DEFAULT_BOARD_ID, Series};
use pracsync_sync::DEFAULT_OUTPUT_ROOT;

/// Download practice files for one series from the practice board.
#[derive(Parser, Debug)]
#[command(name = "pracsync")]
#[command(version, about = "Download practice files from the Monday.com practice board")]
#[command(after_help = "Example:\n  pracsync --series elementary_core --token $MONDAY_API_TOKEN --output ~/Documents/IE")]
pub struct Cli {
    /// Practice series to download
    #[arg(long, value_enum)]
    pub series: SeriesArg,

    /// Monday.com API token
    #[arg(long, env = "MONDAY_API_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Output directory for downloaded files
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub output: PathBuf,

    /// Board to read practices from
    #[arg(long = "board-id", default_value = DEFAULT_BOARD_ID)]
    pub board_id: String,

    /// Do not write the CSV report
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// A [`Series`] as a command-line value.
///
/// Values are the series keys; the help text shows each board group title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesArg(pub Series);

const SERIES_ARGS: [SeriesArg; 8] = [
    SeriesArg(Series::HighSchoolCore),
    SeriesArg(Series::MiddleSchoolCore),
    SeriesArg(Series::ElementaryCore),
    SeriesArg(Series::EarlyLearningCore),
    SeriesArg(Series::Transition),
    SeriesArg(Series::SchoolSafety),
    SeriesArg(Series::CounselorSeries),
    SeriesArg(Series::SoundPractices),
];

impl ValueEnum for SeriesArg {
    fn value_variants<'a>() -> &'a [Self] {
        &SERIES_ARGS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.0.key()).help(self.0.label()))
    }
}
