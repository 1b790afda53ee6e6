use crate::error::SessionError;
use crate::types::{Coords, WorkoutKind};
use crate::workout::{Cycling, Running, WorkoutBase, WorkoutRecord};

/// True iff every value is a finite number.
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True iff every value is strictly greater than zero. NaN fails.
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|&v| v > 0.0)
}

/// Raw numbers from the workout form.
///
/// `extra` is the cadence for running and the elevation gain for cycling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub extra: f64,
}

impl Submission {
    pub const fn running(distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance_km,
            duration_min,
            extra: cadence_spm,
        }
    }

    pub const fn cycling(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance_km,
            duration_min,
            extra: elevation_gain_m,
        }
    }

    /// Every field must be finite. Distance and duration must be positive,
    /// and so must cadence. Elevation gain may be zero or negative.
    pub fn validate(self) -> Result<ValidSubmission, SessionError> {
        let Self {
            kind,
            distance_km,
            duration_min,
            extra,
        } = self;

        let ok = all_finite(&[distance_km, duration_min, extra])
            && match kind {
                WorkoutKind::Running => all_positive(&[distance_km, duration_min, extra]),
                WorkoutKind::Cycling => all_positive(&[distance_km, duration_min]),
            };

        if !ok {
            return Err(SessionError::InvalidInput { kind });
        }
        Ok(ValidSubmission(self))
    }
}

/// A submission that passed [`Submission::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidSubmission(Submission);

impl ValidSubmission {
    pub fn into_record(self, coords: Coords) -> WorkoutRecord {
        let Submission {
            kind,
            distance_km,
            duration_min,
            extra,
        } = self.0;
        let base = WorkoutBase::new(coords, distance_km, duration_min);
        match kind {
            WorkoutKind::Running => Running::new(base, extra).into(),
            WorkoutKind::Cycling => Cycling::new(base, extra).into(),
        }
    }
}
