//! Trip name, time window, data source and the Run button.

use dioxus::prelude::*;

use crate::actions;
use crate::state::{AppState, Services};

#[component]
pub fn TripForm() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<Services>();
    let name = (state.trip_name)();
    let start = (state.start_local)();
    let end = (state.end_local)();
    let source = (state.data_source)();
    let sources = services.config.data_sources.clone();
    let loading = matches!(
        state.trip.read().status(),
        twp_core::state::ResultStatus::Loading
    );
    let input_error = state.trip.read().input_error().map(str::to_string);

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "Trip: "
                input {
                    r#type: "text",
                    placeholder: "Untitled Trip",
                    value: "{name}",
                    oninput: move |evt: Event<FormData>| state.trip_name.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "datetime-local",
                    value: "{start}",
                    onchange: move |evt: Event<FormData>| state.start_local.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "datetime-local",
                    value: "{end}",
                    onchange: move |evt: Event<FormData>| state.end_local.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold;",
                "Source: "
                select {
                    onchange: move |evt: Event<FormData>| state.data_source.set(evt.value()),
                    for option_source in sources {
                        option {
                            key: "{option_source.value}",
                            selected: option_source.value == source,
                            value: "{option_source.value}",
                            "{option_source.label}"
                        }
                    }
                }
            }
            button {
                disabled: loading,
                style: "padding: 6px 18px; font-weight: bold; cursor: pointer;",
                onclick: move |_| actions::run_plan(state, services.clone()),
                if loading { "Running…" } else { "Run" }
            }
        }
        if let Some(message) = input_error {
            div {
                style: "font-size: 13px; color: #C62828; margin: 4px 0;",
                "{message}"
            }
        }
    }
}
