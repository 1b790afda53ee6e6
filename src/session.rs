use crate::dlog;
use crate::error::SessionError;
use crate::types::{Coords, DEFAULT_MAP_ZOOM, MapView, WorkoutKind};
use crate::utils::map_link;
use crate::validate::Submission;
use crate::workout::WorkoutRecord;
use serde::Serialize;

/// The workout form: hidden until the map is clicked, showing either the
/// cadence field (running) or the elevation field (cycling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub visible: bool,
    pub kind: WorkoutKind,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            visible: false,
            kind: WorkoutKind::Running,
        }
    }
}

/// State for one tracking session: the map, the pending click and the
/// workouts logged so far, in insertion order.
#[derive(Debug)]
pub struct TrackerSession {
    zoom: u8,
    map: Option<MapView>,
    pending: Option<Coords>,
    form: FormState,
    workouts: Vec<WorkoutRecord>,
}

impl Default for TrackerSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_ZOOM)
    }
}

impl TrackerSession {
    pub fn new(zoom: u8) -> Self {
        Self {
            zoom,
            map: None,
            pending: None,
            form: FormState::default(),
            workouts: Vec::new(),
        }
    }

    /// Geolocation succeeded: centre the map on the user's position.
    ///
    /// Calling it again recentres the map; logged workouts are kept.
    pub fn load_map(&mut self, position: Coords) -> MapView {
        tracing::info!(link = %map_link(position), "current location");
        let view = MapView {
            center: position,
            zoom: self.zoom,
        };
        self.map = Some(view);
        view
    }

    /// Geolocation was denied or is unavailable. Nothing is retried.
    pub fn geolocation_failed(&self) -> SessionError {
        tracing::warn!(has_map = self.map.is_some(), "geolocation unavailable");
        SessionError::GeolocationUnavailable
    }

    /// Remember where the map was clicked and open the form.
    pub fn click_map(&mut self, at: Coords) -> Result<FormState, SessionError> {
        if self.map.is_none() {
            return Err(SessionError::MapNotLoaded);
        }
        dlog!("map click at={at} replaced_pending={}", self.pending.is_some());
        self.pending = Some(at);
        self.form.visible = true;
        Ok(self.form)
    }

    /// Switch the form between the cadence and elevation fields.
    pub fn toggle_form_kind(&mut self) -> FormState {
        self.form.kind = self.form.kind.toggled();
        dlog!("form kind={}", self.form.kind);
        self.form
    }

    /// Validate a form submission, build the workout at the pending click
    /// location and append it.
    ///
    /// On any error the session is left untouched, including the pending
    /// location, so the user can fix the form and submit again.
    pub fn record_submission(
        &mut self,
        submission: Submission,
    ) -> Result<&WorkoutRecord, SessionError> {
        let at = self.pending.ok_or(SessionError::MissingLocation)?;
        let valid = submission.validate().inspect_err(|e| {
            tracing::warn!(kind = %submission.kind, err = %e, "rejected workout");
        })?;

        let record = valid.into_record(at);
        tracing::info!(
            id = %record.id(),
            kind = %record.kind(),
            at = %at,
            "workout logged"
        );

        self.pending = None;
        self.form.visible = false;
        self.workouts.push(record);
        let Some(logged) = self.workouts.last() else {
            unreachable!("workouts is non-empty after push");
        };
        Ok(logged)
    }

    pub fn workouts(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    pub const fn map(&self) -> Option<MapView> {
        self.map
    }

    pub const fn pending(&self) -> Option<Coords> {
        self.pending
    }

    pub const fn form(&self) -> FormState {
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located() -> TrackerSession {
        let mut s = TrackerSession::default();
        s.load_map(Coords::new(38.72, -9.14).unwrap());
        s
    }

    fn click(s: &mut TrackerSession, lat: f64, lon: f64) {
        s.click_map(Coords::new(lat, lon).unwrap()).unwrap();
    }

    #[test]
    fn load_map_uses_configured_zoom() {
        let mut s = TrackerSession::new(11);
        let view = s.load_map(Coords::new(1.0, 2.0).unwrap());
        assert_eq!(view.zoom, 11);
        assert_eq!(s.map(), Some(view));
        assert_eq!(TrackerSession::default().zoom, 14);
    }

    #[test]
    fn click_before_map_is_rejected() {
        let mut s = TrackerSession::default();
        let err = s.click_map(Coords::new(1.0, 2.0).unwrap()).unwrap_err();
        assert_eq!(err, SessionError::MapNotLoaded);
        assert_eq!(s.pending(), None);
        assert!(!s.form().visible);
    }

    #[test]
    fn running_submission_yields_pace() {
        let mut s = located();
        click(&mut s, 38.7, -9.1);
        let rec = s.record_submission(Submission::running(5.0, 30.0, 170.0)).unwrap();
        let WorkoutRecord::Running(r) = rec else {
            panic!("expected running record");
        };
        assert_eq!(r.pace_min_per_km, 6.0);
        assert_eq!(rec.kind(), WorkoutKind::Running);
    }

    #[test]
    fn cycling_submission_yields_speed() {
        let mut s = located();
        click(&mut s, 38.7, -9.1);
        let rec = s.record_submission(Submission::cycling(20.0, 60.0, 300.0)).unwrap();
        let WorkoutRecord::Cycling(c) = rec else {
            panic!("expected cycling record");
        };
        assert_eq!(c.speed_km_per_hr, 20.0);
    }

    #[test]
    fn each_submission_appends_in_order() {
        let mut s = located();
        click(&mut s, 1.0, 1.0);
        let first = s.record_submission(Submission::running(5.0, 30.0, 170.0)).unwrap().clone();
        click(&mut s, 2.0, 2.0);
        s.record_submission(Submission::cycling(20.0, 60.0, 300.0)).unwrap();

        assert_eq!(s.workouts().len(), 2);
        assert_eq!(s.workouts()[0], first);
        assert_eq!(s.workouts()[1].kind(), WorkoutKind::Cycling);
        assert_eq!(s.workouts()[1].coords(), Coords::new(2.0, 2.0).unwrap());
    }

    #[test]
    fn returned_record_is_the_appended_one() {
        let mut s = located();
        click(&mut s, 1.0, 1.0);
        s.record_submission(Submission::running(5.0, 30.0, 170.0)).unwrap();
        click(&mut s, 3.0, 3.0);
        let id = s.record_submission(Submission::cycling(20.0, 60.0, 0.0)).unwrap().id();
        assert_eq!(s.workouts().last().map(WorkoutRecord::id), Some(id));
        assert_ne!(s.workouts()[0].id(), id);
    }

    #[test]
    fn invalid_submission_changes_nothing() {
        let mut s = located();
        click(&mut s, 1.0, 1.0);
        s.record_submission(Submission::running(5.0, 30.0, 170.0)).unwrap();
        click(&mut s, 2.0, 2.0);
        let before = s.workouts().to_vec();

        let err = s.record_submission(Submission::running(-1.0, 30.0, 170.0)).unwrap_err();
        assert!(matches!(err, SessionError::InvalidInput { .. }));
        assert!(s.record_submission(Submission::cycling(20.0, f64::INFINITY, 1.0)).is_err());

        assert_eq!(s.workouts(), before.as_slice());
        assert_eq!(s.pending(), Some(Coords::new(2.0, 2.0).unwrap()));
        assert!(s.form().visible);
    }

    #[test]
    fn submission_consumes_pending_location() {
        let mut s = located();
        click(&mut s, 1.0, 1.0);
        s.record_submission(Submission::running(5.0, 30.0, 170.0)).unwrap();
        assert_eq!(s.pending(), None);
        assert!(!s.form().visible);

        let err = s.record_submission(Submission::running(5.0, 30.0, 170.0)).unwrap_err();
        assert_eq!(err, SessionError::MissingLocation);
        assert_eq!(s.workouts().len(), 1);
    }

    #[test]
    fn toggle_flips_form_kind() {
        let mut s = TrackerSession::default();
        assert_eq!(s.toggle_form_kind().kind, WorkoutKind::Cycling);
        assert_eq!(s.toggle_form_kind().kind, WorkoutKind::Running);
    }

    #[test]
    fn geolocation_failure_leaves_session_without_map() {
        let s = TrackerSession::default();
        assert_eq!(s.geolocation_failed(), SessionError::GeolocationUnavailable);
        assert_eq!(s.map(), None);
    }
}
