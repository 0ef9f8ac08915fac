//! User actions. Each one applies a `TripState` transition, spawns at most
//! the requests it needs, and feeds the outcome back through the ticket it
//! was handed so a slower, older response cannot overwrite a newer one.

use dioxus::prelude::*;
use twp_core::api::{self, Backend};

use crate::map_bridge;
use crate::state::{AppState, Services};

/// Map click: normalize, move the marker, resolve name and timezone.
pub fn select_location(mut state: AppState, services: Services, lat: f64, lon: f64) {
    let (ticket, location) = state.trip.write().select_location(lat, lon);
    map_bridge::place_marker(location.lat, location.lon);
    spawn(async move {
        let details = api::lookup_location(&services.backend, &location).await;
        state.trip.write().receive_location_details(ticket, details);
    });
}

/// "Run": validate the form, submit the plan, refresh trips on success.
pub fn run_plan(mut state: AppState, services: Services) {
    let draft = state.draft();
    if let Err(e) = draft.validate() {
        log::info!("Plan not sent: {}", e);
        state.trip.write().reject_input(&e);
        return;
    }
    let ticket = state.trip.write().begin_plan();
    state.modal_factor.set(None);
    spawn(async move {
        let outcome = api::run_plan(&services.backend, &draft).await;
        if let Err(e) = &outcome {
            log::error!("Plan failed: {}", e);
        }
        let succeeded = outcome.is_ok();
        state.trip.write().receive_plan_result(ticket, outcome);
        if succeeded {
            refresh_trips(state, services);
        }
    });
}

/// Re-fetch the saved trips list.
pub fn refresh_trips(mut state: AppState, services: Services) {
    let ticket = state.trips_gen.write().next();
    spawn(async move {
        let outcome = services.backend.list_trips().await;
        apply_trips(state, ticket, outcome);
    });
}

/// Delete a trip; the list is re-fetched whether or not the delete worked.
pub fn delete_trip(mut state: AppState, services: Services, id: String) {
    let ticket = state.trips_gen.write().next();
    spawn(async move {
        let outcome = api::delete_and_refresh(&services.backend, &id).await;
        apply_trips(state, ticket, outcome);
    });
}

/// Open a saved trip as the current result.
pub fn view_trip(mut state: AppState, services: Services, id: String) {
    let ticket = state.trip.write().begin_plan();
    state.modal_factor.set(None);
    spawn(async move {
        let outcome = api::open_trip(&services.backend, &id).await;
        if let Err(e) = &outcome {
            log::error!("Opening trip {} failed: {}", id, e);
        }
        state.trip.write().load_saved_trip(ticket, outcome);
    });
}

fn apply_trips(
    mut state: AppState,
    ticket: twp_core::state::Ticket,
    outcome: twp_core::error::Result<Vec<twp_core::plan::SavedTrip>>,
) {
    if !state.trips_gen.read().is_current(ticket) {
        log::debug!("Dropping stale trips list {:?}", ticket);
        return;
    }
    match outcome {
        Ok(trips) => {
            state.trips.set(trips);
            state.trips_error.set(None);
        }
        Err(e) => {
            log::error!("Listing trips failed: {}", e);
            state.trips_error.set(Some(e.to_string()));
        }
    }
}
