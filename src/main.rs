#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::Parser;
use std::io;
use waymark::{cli, events, session::TrackerSession, utils};

#[macro_use]
extern crate waymark;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let input = utils::open_events(&cli.events)?;
    dlog!(
        "mode=replay events={} zoom={} pretty={}",
        cli.events.display(),
        cli.zoom,
        cli.pretty
    );

    let mut session = TrackerSession::new(cli.zoom);
    let stdout = io::stdout();
    let summary = events::replay(input, &mut session, stdout.lock(), cli.pretty)?;

    tracing::info!(
        events = summary.events,
        workouts = summary.workouts,
        alerts = summary.alerts,
        "session done"
    );

    Ok(())
}
