use crate::types::WorkoutKind;

/// Failures of a single session operation. None of them poison the session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Inputs have to be positive numbers")]
    InvalidInput { kind: WorkoutKind },

    #[error("Invalid coordinates: lat={lat} lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("Unknown workout type: {0:?}")]
    UnknownKind(String),

    #[error("could not get current location")]
    GeolocationUnavailable,

    #[error("Map is not loaded yet")]
    MapNotLoaded,

    #[error("Click on the map to choose a workout location first")]
    MissingLocation,
}
