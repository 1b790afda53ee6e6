//! Logged workouts and their derived metrics.
//!
//! Records are built from inputs that were already validated, so construction
//! cannot fail. The derived metric is computed once and never recomputed.

use crate::types::{Coords, WorkoutKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkoutId(Uuid);

impl WorkoutId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorkoutId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Fields shared by every workout variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutBase {
    pub id: WorkoutId,
    pub created_at: DateTime<Utc>,
    pub coords: Coords,
    pub distance_km: f64,
    pub duration_min: f64,
}

impl WorkoutBase {
    pub fn new(coords: Coords, distance_km: f64, duration_min: f64) -> Self {
        Self::at(Utc::now(), coords, distance_km, duration_min)
    }

    pub fn at(
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
    ) -> Self {
        Self {
            id: WorkoutId::new(),
            created_at,
            coords,
            distance_km,
            duration_min,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Running {
    #[serde(flatten)]
    pub base: WorkoutBase,
    pub cadence_spm: f64,
    pub pace_min_per_km: f64,
}

impl Running {
    pub fn new(base: WorkoutBase, cadence_spm: f64) -> Self {
        // min/km
        let pace_min_per_km = base.duration_min / base.distance_km;
        Self {
            base,
            cadence_spm,
            pace_min_per_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cycling {
    #[serde(flatten)]
    pub base: WorkoutBase,
    pub elevation_gain_m: f64,
    pub speed_km_per_hr: f64,
}

impl Cycling {
    pub fn new(base: WorkoutBase, elevation_gain_m: f64) -> Self {
        // km/h
        let speed_km_per_hr = base.distance_km / (base.duration_min / 60.0);
        Self {
            base,
            elevation_gain_m,
            speed_km_per_hr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutRecord {
    Running(Running),
    Cycling(Cycling),
}

impl WorkoutRecord {
    pub const fn base(&self) -> &WorkoutBase {
        match self {
            Self::Running(r) => &r.base,
            Self::Cycling(c) => &c.base,
        }
    }

    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Cycling(_) => WorkoutKind::Cycling,
        }
    }

    pub const fn id(&self) -> WorkoutId {
        self.base().id
    }

    pub const fn coords(&self) -> Coords {
        self.base().coords
    }

    /// "Running on October 16"
    pub fn description(&self) -> String {
        let created = self.base().created_at.format("%B %-d");
        format!("{} on {created}", self.kind().label())
    }
}

impl From<Running> for WorkoutRecord {
    fn from(r: Running) -> Self {
        Self::Running(r)
    }
}

impl From<Cycling> for WorkoutRecord {
    fn from(c: Cycling) -> Self {
        Self::Cycling(c)
    }
}
