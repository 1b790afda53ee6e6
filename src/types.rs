use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MAP_ZOOM: u8 = 14;

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

impl Coords {
    /// Build a coordinate pair, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, SessionError> {
        let in_range = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if !in_range {
            return Err(SessionError::InvalidCoordinates { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lon)
    }
}

/// Parsed case-insensitively, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Cycling,
            Self::Cycling => Self::Running,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            other => Err(SessionError::UnknownKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for WorkoutKind {
    type Error = SessionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// The map the session draws on, centred on the user's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coords,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

impl PopupOptions {
    pub fn for_kind(kind: WorkoutKind) -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: format!("{kind}-popup"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_accept_bounds() {
        assert!(Coords::new(90.0, 180.0).is_ok());
        assert!(Coords::new(-90.0, -180.0).is_ok());
        assert!(Coords::new(39.0, -12.0).is_ok());
    }

    #[test]
    fn coords_reject_out_of_range_and_non_finite() {
        assert!(Coords::new(90.1, 0.0).is_err());
        assert!(Coords::new(0.0, -180.5).is_err());
        assert!(Coords::new(f64::NAN, 0.0).is_err());
        assert!(Coords::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Running".parse::<WorkoutKind>().ok(), Some(WorkoutKind::Running));
        assert_eq!(" cycling ".parse::<WorkoutKind>().ok(), Some(WorkoutKind::Cycling));
        assert!("swimming".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn kind_deserializes_through_from_str() {
        let k: WorkoutKind = serde_json::from_str("\"Cycling\"").unwrap();
        assert_eq!(k, WorkoutKind::Cycling);
        let err = serde_json::from_str::<WorkoutKind>("\"swimming\"").unwrap_err();
        assert!(err.to_string().contains("Unknown workout type: \"swimming\""));
    }

    #[test]
    fn kind_serializes_lowercase() {
        let s = serde_json::to_string(&WorkoutKind::Cycling).unwrap();
        assert_eq!(s, "\"cycling\"");
    }

    #[test]
    fn popup_class_follows_kind() {
        let p = PopupOptions::for_kind(WorkoutKind::Running);
        assert_eq!(p.class_name, "running-popup");
        assert_eq!((p.max_width, p.min_width), (250, 100));
        assert!(!p.auto_close && !p.close_on_click);
    }
}
