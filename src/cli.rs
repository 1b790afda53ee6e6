use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::types::DEFAULT_MAP_ZOOM;

#[derive(Parser, Debug)]
#[command(
    name = "waymark",
    about = "Log running and cycling workouts at clicked map locations"
)]
pub struct Cli {
    /// JSON-lines file of UI events (`located`, `click`, `toggle`, `submit`, `list`, ...).
    ///
    /// Default: `-` (stdin)
    #[arg(value_name = "EVENTS", default_value = "-")]
    pub events: PathBuf,

    /// Zoom level of the map once the current location is known
    #[arg(long, default_value_t = DEFAULT_MAP_ZOOM)]
    pub zoom: u8,

    /// Pretty-print each JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
