//! Trip Weather Planner
//!
//! Browser client for the planner API. The backend evaluates the forecast;
//! this app collects the inputs and renders what comes back.
//!
//! Data flow:
//! 1. A map click normalizes the point, moves the marker and resolves the
//!    place name and timezone.
//! 2. "Run" reads the preference form into a request and posts it.
//! 3. The result replaces the current one and is turned into view models for
//!    the summary, conditions, suggestions, uncertainty and detail panels.
//! 4. The saved trips list is re-fetched after every successful run.

use dioxus::prelude::*;
use twp_ui::components::{
    LocationBadge, MapPanel, PreferencesForm, ResultPanels, TripForm, TripsList,
};
use twp_ui::state::{AppState, Services};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("trip-planner-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);
    use_context_provider(Services::from_window);

    rsx! {
        div {
            style: "max-width: 980px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 { style: "margin: 8px 0;", "Trip Weather Planner" }

            MapPanel {}
            LocationBadge {}

            div {
                style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
                TripForm {}
                PreferencesForm {}
            }

            ResultPanels {}
            TripsList {}
        }
    }
}
