//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. The trip state itself is one `TripState` signal that
//! is only changed through its transition methods. `Services` carries the
//! config and backend client, which never change after startup.

use std::rc::Rc;

use dioxus::prelude::*;
use twp_core::api::{HttpBackend, PlanDraft};
use twp_core::plan::SavedTrip;
use twp_core::prefs::{read_preferences, PreferenceForm};
use twp_core::state::{Generation, TripState};
use twp_core::{Factor, PlannerConfig};

/// Shared application state for the planner.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current location and result slots
    pub trip: Signal<TripState>,
    /// Saved trips as last fetched
    pub trips: Signal<Vec<SavedTrip>>,
    /// Error from the last trips fetch
    pub trips_error: Signal<Option<String>>,
    /// Generation of the trips list slot
    pub trips_gen: Signal<Generation>,
    /// Raw preference form values
    pub prefs_form: Signal<PreferenceForm>,
    pub trip_name: Signal<String>,
    /// `YYYY-MM-DDTHH:MM` from the datetime-local inputs
    pub start_local: Signal<String>,
    pub end_local: Signal<String>,
    /// Optional data-source selector value ("" for backend default)
    pub data_source: Signal<String>,
    /// Factor whose detail modal is open
    pub modal_factor: Signal<Option<Factor>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            trip: Signal::new(TripState::default()),
            trips: Signal::new(Vec::new()),
            trips_error: Signal::new(None),
            trips_gen: Signal::new(Generation::default()),
            prefs_form: Signal::new(PreferenceForm::default()),
            trip_name: Signal::new(String::new()),
            start_local: Signal::new(String::new()),
            end_local: Signal::new(String::new()),
            data_source: Signal::new(String::new()),
            modal_factor: Signal::new(None),
        }
    }

    /// Snapshot the form into a plan draft. Preferences are read fresh each time.
    pub fn draft(&self) -> PlanDraft {
        PlanDraft {
            trip_name: self.trip_name.read().clone(),
            location: self.trip.read().location().cloned(),
            start_local: self.start_local.read().clone(),
            end_local: self.end_local.read().clone(),
            data_source: self.data_source.read().clone(),
            prefs: read_preferences(&self.prefs_form.read()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Startup-time services shared by components and actions.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<PlannerConfig>,
    pub backend: HttpBackend,
}

impl Services {
    pub fn new(config: PlannerConfig) -> Self {
        let backend = HttpBackend::new(&config.api_base);
        log::info!("Using planner API at {}", backend.base());
        Self {
            config: Rc::new(config),
            backend,
        }
    }

    /// Config for the page we are served from.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(PlannerConfig::for_origin(&origin))
    }
}
