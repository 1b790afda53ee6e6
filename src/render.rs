//! What the map and the workout list show for a logged workout.

use crate::types::{Coords, PopupOptions, WorkoutKind};
use crate::utils::{format_duration, minutes_to_duration};
use crate::workout::{WorkoutId, WorkoutRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub coords: Coords,
    pub popup: PopupOptions,
    pub content: String,
}

pub fn marker_for(record: &WorkoutRecord) -> Marker {
    let kind = record.kind();
    Marker {
        id: record.id(),
        kind,
        coords: record.coords(),
        popup: PopupOptions::for_kind(kind),
        content: record.description(),
    }
}

/// One line for the workout list, e.g.
/// `Running on October 16 | 5.0 km | 00:30:00 | 6.0 min/km | 170 spm`.
///
/// Durations past what `chrono` can hold and derived metrics that overflowed
/// to infinity print as `unknown`.
pub fn list_entry(record: &WorkoutRecord) -> String {
    let base = record.base();
    let dur_str = minutes_to_duration(base.duration_min)
        .map_or_else(|| "unknown".to_string(), format_duration);
    let head = format!(
        "{} | {:.1} km | {dur_str}",
        record.description(),
        base.distance_km
    );
    match record {
        WorkoutRecord::Running(r) => format!(
            "{head} | {} | {:.0} spm",
            metric(r.pace_min_per_km, "min/km"),
            r.cadence_spm
        ),
        WorkoutRecord::Cycling(c) => format!(
            "{head} | {} | {:.0} m",
            metric(c.speed_km_per_hr, "km/h"),
            c.elevation_gain_m
        ),
    }
}

fn metric(value: f64, unit: &str) -> String {
    if value.is_finite() {
        format!("{value:.1} {unit}")
    } else {
        format!("unknown {unit}")
    }
}
