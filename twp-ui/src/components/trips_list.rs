//! Saved trips with view and delete actions.

use dioxus::prelude::*;
use twp_core::view::trip_rows;

use super::{ErrorDisplay, PANEL_STYLE};
use crate::actions;
use crate::state::{AppState, Services};

#[component]
pub fn TripsList() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let rows = trip_rows(&state.trips.read());
    let error = (state.trips_error)();

    // Initial fetch on mount
    let mount_services = services.clone();
    use_effect(move || actions::refresh_trips(state, mount_services.clone()));

    let refresh_services = services.clone();

    rsx! {
        div {
            style: PANEL_STYLE,
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; font-size: 16px;", "Saved trips" }
                button {
                    onclick: move |_| actions::refresh_trips(state, refresh_services.clone()),
                    "Refresh"
                }
            }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            if rows.is_empty() {
                p { style: "color: #888; font-size: 13px;", "No saved trips yet." }
            } else {
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 13px; margin-top: 8px;",
                    thead {
                        tr {
                            th { style: "text-align: left;", "Name" }
                            th { style: "text-align: left;", "Window" }
                            th { style: "text-align: left;", "Timezone" }
                            th { style: "text-align: left;", "Last result" }
                            th {}
                        }
                    }
                    tbody {
                        for row in rows {
                            TripLine {
                                key: "{row.id}",
                                id: row.id.clone(),
                                name: row.name.clone(),
                                window: row.window.clone(),
                                timezone: row.timezone.clone(),
                                verdict: row.verdict,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TripLine(id: String, name: String, window: String, timezone: String, verdict: &'static str) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let view_id = id.clone();
    let view_services = services.clone();

    rsx! {
        tr {
            td { "{name}" }
            td { "{window}" }
            td { "{timezone}" }
            td { "{verdict}" }
            td {
                style: "white-space: nowrap;",
                button {
                    onclick: move |_| actions::view_trip(state, view_services.clone(), view_id.clone()),
                    "View"
                }
                button {
                    style: "margin-left: 6px; color: #C62828;",
                    onclick: move |_| actions::delete_trip(state, services.clone(), id.clone()),
                    "Delete"
                }
            }
        }
    }
}
