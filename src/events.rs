//! Event wiring between a UI and a [`TrackerSession`].
//!
//! Each input line is one JSON [`UiEvent`]; each reaction is written as one
//! JSON [`Output`] line.

use crate::dlog;
use crate::error::SessionError;
use crate::render::{Marker, list_entry, marker_for};
use crate::session::{FormState, TrackerSession};
use crate::types::{Coords, MapView, WorkoutKind};
use crate::validate::Submission;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Located {
        lat: f64,
        lon: f64,
    },
    LocationDenied,
    Click {
        lat: f64,
        lon: f64,
    },
    Toggle,
    Submit {
        /// Falls back to the kind currently selected in the form.
        #[serde(rename = "type", default)]
        kind: Option<WorkoutKind>,
        #[serde(default)]
        distance: Option<f64>,
        #[serde(default)]
        duration: Option<f64>,
        #[serde(default)]
        cadence: Option<f64>,
        #[serde(default)]
        elevation: Option<f64>,
    },
    List,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "output", rename_all = "snake_case")]
pub enum Output {
    Map(MapView),
    Form(FormState),
    Marker(Marker),
    Entry { text: String },
    Alert { message: String },
}

impl From<SessionError> for Output {
    fn from(e: SessionError) -> Self {
        Self::Alert {
            message: e.to_string(),
        }
    }
}

/// Apply one event to the session and collect what the UI should show.
pub fn dispatch(session: &mut TrackerSession, event: UiEvent) -> Vec<Output> {
    match event {
        UiEvent::Located { lat, lon } => match Coords::new(lat, lon) {
            Ok(at) => vec![Output::Map(session.load_map(at))],
            Err(e) => vec![e.into()],
        },
        UiEvent::LocationDenied => vec![session.geolocation_failed().into()],
        UiEvent::Click { lat, lon } => {
            match Coords::new(lat, lon).and_then(|at| session.click_map(at)) {
                Ok(form) => vec![Output::Form(form)],
                Err(e) => vec![e.into()],
            }
        }
        UiEvent::Toggle => vec![Output::Form(session.toggle_form_kind())],
        UiEvent::Submit {
            kind,
            distance,
            duration,
            cadence,
            elevation,
        } => {
            let kind = kind.unwrap_or(session.form().kind);
            // Empty form fields read as NaN and fail validation.
            let extra = match kind {
                WorkoutKind::Running => cadence,
                WorkoutKind::Cycling => elevation,
            };
            let submission = Submission {
                kind,
                distance_km: distance.unwrap_or(f64::NAN),
                duration_min: duration.unwrap_or(f64::NAN),
                extra: extra.unwrap_or(f64::NAN),
            };
            match session.record_submission(submission) {
                Ok(record) => {
                    let marker = marker_for(record);
                    vec![Output::Marker(marker), Output::Form(session.form())]
                }
                Err(e) => vec![e.into()],
            }
        }
        UiEvent::List => session
            .workouts()
            .iter()
            .map(|w| Output::Entry {
                text: list_entry(w),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub workouts: usize,
    pub alerts: usize,
}

/// Feed every event line from `input` through `dispatch`, writing outputs to
/// `out`. Malformed lines become alerts; only I/O failures abort the replay.
pub fn replay<R: BufRead, W: Write>(
    input: R,
    session: &mut TrackerSession,
    mut out: W,
    pretty: bool,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("reading event line {line_no}"))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outputs = match serde_json::from_str::<UiEvent>(line) {
            Ok(event) => {
                summary.events += 1;
                dlog!("line={line_no} event={event:?}");
                dispatch(session, event)
            }
            Err(e) => {
                tracing::warn!(line = line_no, err = %e, "malformed event");
                vec![Output::Alert {
                    message: format!("Malformed event on line {line_no}: {e}"),
                }]
            }
        };

        for o in &outputs {
            if matches!(o, Output::Alert { .. }) {
                summary.alerts += 1;
            }
            let json = if pretty {
                serde_json::to_string_pretty(o)
            } else {
                serde_json::to_string(o)
            }
            .context("serializing output")?;
            writeln!(out, "{json}").context("writing output")?;
        }
    }

    out.flush().context("flushing output")?;
    summary.workouts = session.workouts().len();
    Ok(summary)
}
