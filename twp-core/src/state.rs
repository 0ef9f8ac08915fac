//! Application state and its transitions.
//!
//! `TripState` owns the "current location" and "current result" slots. It is
//! only changed through the transition methods below. Every request-bearing
//! transition hands out a `Ticket`; a completion carrying an older ticket than
//! the slot's latest is stale and dropped.

use crate::error::PlanError;
use crate::geo::{SelectedLocation, FALLBACK_TIMEZONE, UNKNOWN_PLACE};
use crate::plan::PlanResult;
use crate::prefs::Preferences;

/// Generation stamp of an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic generation counter for one state slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Generation(u64);

impl Generation {
    pub fn next(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.0
    }
}

/// What the location lookups for one click produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationDetails {
    pub name: Option<String>,
    pub timezone: Option<String>,
    /// Non-fatal problem to surface, e.g. a failed timezone lookup.
    pub notice: Option<String>,
}

/// The result currently on screen and the preferences it was evaluated with.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentResult {
    pub result: PlanResult,
    pub prefs: Preferences,
}

/// Status of the result panels.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Backend said `ok: false`; panels hidden.
    Failed(String),
    /// No forecast for the window; panels hidden.
    NoData(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripState {
    location: Option<SelectedLocation>,
    location_gen: Generation,
    current: Option<CurrentResult>,
    result_gen: Generation,
    status: ResultStatus,
    /// Missing-input message shown next to the Run button.
    input_error: Option<String>,
    /// Generic transport/parse banner.
    banner: Option<String>,
    /// Non-fatal notice from the map lookups.
    notice: Option<String>,
}

impl TripState {
    pub fn location(&self) -> Option<&SelectedLocation> {
        self.location.as_ref()
    }

    pub fn current(&self) -> Option<&CurrentResult> {
        self.current.as_ref()
    }

    pub fn status(&self) -> &ResultStatus {
        &self.status
    }

    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Map click: replace the location and start its lookups.
    pub fn select_location(&mut self, lat: f64, lon: f64) -> (Ticket, SelectedLocation) {
        let location = SelectedLocation::from_click(lat, lon);
        self.location = Some(location.clone());
        self.notice = None;
        (self.location_gen.next(), location)
    }

    /// Apply lookup results. Returns false when a newer click superseded them.
    pub fn receive_location_details(&mut self, ticket: Ticket, details: LocationDetails) -> bool {
        if !self.location_gen.is_current(ticket) {
            log::debug!("Dropping stale location lookup {:?}", ticket);
            return false;
        }
        let Some(location) = self.location.as_mut() else {
            return false;
        };
        location.name = Some(details.name.unwrap_or_else(|| UNKNOWN_PLACE.to_string()));
        location.timezone = Some(
            details
                .timezone
                .unwrap_or_else(|| FALLBACK_TIMEZONE.to_string()),
        );
        self.notice = details.notice;
        true
    }

    /// Record a client-side validation failure; nothing else changes.
    pub fn reject_input(&mut self, error: &PlanError) {
        self.input_error = Some(error.to_string());
    }

    /// A plan run or saved-trip view is about to hit the network.
    pub fn begin_plan(&mut self) -> Ticket {
        self.input_error = None;
        self.banner = None;
        self.status = ResultStatus::Loading;
        self.result_gen.next()
    }

    /// Apply the outcome of a plan run. Returns false for stale responses.
    pub fn receive_plan_result(
        &mut self,
        ticket: Ticket,
        outcome: Result<CurrentResult, PlanError>,
    ) -> bool {
        if !self.result_gen.is_current(ticket) {
            log::debug!("Dropping stale plan response {:?}", ticket);
            return false;
        }
        match outcome {
            Ok(current) => {
                self.current = Some(current);
                self.status = ResultStatus::Ready;
            }
            Err(PlanError::MissingInput(msg)) => {
                self.input_error = Some(msg.to_string());
                self.restore_status();
            }
            Err(PlanError::NoDataForWindow(msg)) => {
                self.current = None;
                self.status = ResultStatus::NoData(msg);
            }
            Err(PlanError::Api(crate::error::ApiError::Backend(msg))) => {
                self.current = None;
                self.status = ResultStatus::Failed(msg);
            }
            Err(PlanError::Api(e)) => {
                // transport/parse failure aborts the action, prior result stays
                self.banner = Some(e.to_string());
                self.restore_status();
            }
        }
        true
    }

    /// Opening a saved trip replaces the result exactly like a fresh run.
    pub fn load_saved_trip(
        &mut self,
        ticket: Ticket,
        outcome: Result<CurrentResult, PlanError>,
    ) -> bool {
        self.receive_plan_result(ticket, outcome)
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    fn restore_status(&mut self) {
        self.status = if self.current.is_some() {
            ResultStatus::Ready
        } else {
            ResultStatus::Idle
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn ready(summary: &str) -> CurrentResult {
        CurrentResult {
            result: PlanResult {
                summary: Some(summary.to_string()),
                ..PlanResult::default()
            },
            prefs: Preferences::default(),
        }
    }

    #[test]
    fn test_location_lookup_defaults() {
        let mut state = TripState::default();
        let (ticket, loc) = state.select_location(91.0, 190.0);
        assert_eq!((loc.lat, loc.lon), (90.0, -170.0));
        let applied = state.receive_location_details(
            ticket,
            LocationDetails {
                name: None,
                timezone: None,
                notice: Some("Timezone lookup failed".to_string()),
            },
        );
        assert!(applied);
        let loc = state.location().unwrap();
        assert_eq!(loc.name.as_deref(), Some("Unknown"));
        assert_eq!(loc.timezone.as_deref(), Some("UTC"));
        assert_eq!(state.notice(), Some("Timezone lookup failed"));
    }

    #[test]
    fn test_stale_location_lookup_is_dropped() {
        let mut state = TripState::default();
        let (first, _) = state.select_location(10.0, 10.0);
        let (second, _) = state.select_location(20.0, 20.0);
        let stale = LocationDetails {
            name: Some("Old".to_string()),
            ..LocationDetails::default()
        };
        assert!(!state.receive_location_details(first, stale));
        assert_eq!(state.location().unwrap().name, None);
        assert!(state.receive_location_details(second, LocationDetails::default()));
        assert_eq!(state.location().unwrap().lat, 20.0);
    }

    #[test]
    fn test_backend_failure_clears_result() {
        let mut state = TripState::default();
        let t = state.begin_plan();
        state.receive_plan_result(t, Ok(ready("first")));
        let t = state.begin_plan();
        state.receive_plan_result(t, Err(ApiError::Backend("X".to_string()).into()));
        assert_eq!(state.status(), &ResultStatus::Failed("X".to_string()));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_no_data_clears_result() {
        let mut state = TripState::default();
        let t = state.begin_plan();
        state.receive_plan_result(t, Ok(ready("first")));
        let t = state.begin_plan();
        state.receive_plan_result(t, Err(PlanError::NoDataForWindow("Y".to_string())));
        assert_eq!(state.status(), &ResultStatus::NoData("Y".to_string()));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_transport_failure_keeps_prior_result() {
        let mut state = TripState::default();
        let t = state.begin_plan();
        state.receive_plan_result(t, Ok(ready("first")));
        let t = state.begin_plan();
        state.receive_plan_result(t, Err(ApiError::Transport("offline".to_string()).into()));
        assert_eq!(state.status(), &ResultStatus::Ready);
        assert_eq!(state.banner(), Some("Request failed: offline"));
        assert!(state.current().is_some());
    }

    #[test]
    fn test_stale_plan_response_is_dropped() {
        let mut state = TripState::default();
        let slow = state.begin_plan();
        let fast = state.begin_plan();
        assert!(state.receive_plan_result(fast, Ok(ready("new"))));
        assert!(!state.receive_plan_result(slow, Ok(ready("old"))));
        let current = state.current().unwrap();
        assert_eq!(current.result.summary.as_deref(), Some("new"));
    }

    #[test]
    fn test_saved_trip_replaces_result() {
        let mut state = TripState::default();
        let t = state.begin_plan();
        state.receive_plan_result(t, Ok(ready("run")));
        let t = state.begin_plan();
        state.load_saved_trip(t, Ok(ready("saved")));
        assert_eq!(
            state.current().unwrap().result.summary.as_deref(),
            Some("saved")
        );
    }

    #[test]
    fn test_reject_input_leaves_result_alone() {
        let mut state = TripState::default();
        let t = state.begin_plan();
        state.receive_plan_result(t, Ok(ready("run")));
        state.reject_input(&PlanError::MissingInput("Pick a location on the map first."));
        assert_eq!(state.input_error(), Some("Pick a location on the map first."));
        assert!(state.current().is_some());
    }
}
