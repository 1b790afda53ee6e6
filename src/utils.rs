use crate::types::Coords;
use anyhow::{Context, Result, bail};
use chrono::Duration;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,waymark={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Open the events source: `-` is stdin, anything else must be a file.
pub fn open_events(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        tracing::info!("reading events from stdin");
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    if path.is_dir() {
        bail!("Events path is a directory: {}", path.display());
    }

    let f = File::open(path).with_context(|| format!("opening events: {}", path.display()))?;
    tracing::info!(path = %path.display(), "reading events file");
    Ok(Box::new(BufReader::new(f)))
}

pub fn map_link(at: Coords) -> String {
    format!("https://www.google.pt/maps/@{},{}", at.lat, at.lon)
}

/// Whole-second duration from fractional minutes, or `None` when the value is
/// not finite or does not fit in a `chrono::Duration`.
pub fn minutes_to_duration(minutes: f64) -> Option<Duration> {
    let secs = (minutes * 60.0).round();
    if !secs.is_finite() {
        return None;
    }
    // Saturates at i64 bounds, which try_seconds then rejects.
    #[allow(clippy::cast_possible_truncation)]
    let secs = secs as i64;
    Duration::try_seconds(secs)
}

pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds().unsigned_abs();
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
