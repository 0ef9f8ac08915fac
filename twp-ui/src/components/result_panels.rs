//! Switches between idle, loading, error and the five result panels.

use dioxus::prelude::*;
use twp_core::state::ResultStatus;
use twp_core::view;

use super::{
    ConditionsPanel, ErrorDisplay, FactorModal, LoadingSpinner, SuggestionsPanel, SummaryPanel,
    UncertaintyPanel,
};
use crate::state::{AppState, Services};

#[component]
pub fn ResultPanels() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<Services>();
    let config = services.config.clone();
    let trip = state.trip.read();
    let banner = trip.banner().map(str::to_string);

    let body = match trip.status() {
        ResultStatus::Idle => rsx! {
            p { style: "color: #888;", "Pick a location and a time window, then press Run." }
        },
        ResultStatus::Loading => rsx! { LoadingSpinner {} },
        ResultStatus::Failed(message) => rsx! {
            ErrorDisplay { message: message.clone() }
        },
        ResultStatus::NoData(message) => rsx! {
            ErrorDisplay { title: "No data: ".to_string(), message: message.clone() }
        },
        ResultStatus::Ready => match trip.current() {
            Some(current) => {
                let summary = view::summary_view(&current.result);
                let conditions = view::condition_rows(&current.result);
                let suggestions = view::suggestions_view(&current.result);
                let uncertainty = view::uncertainty_rows(current, &config.flip, &config.risk);
                // the modal table is only built while it is open
                let detail = (state.modal_factor)().map(|factor| {
                    view::factor_detail(current, factor, &config.api_base, &config.flip, &config.risk)
                });
                rsx! {
                    SummaryPanel { view: summary }
                    ConditionsPanel { rows: conditions }
                    SuggestionsPanel { view: suggestions }
                    UncertaintyPanel { rows: uncertainty }
                    if let Some(detail) = detail {
                        FactorModal { detail }
                    }
                }
            }
            None => rsx! {},
        },
    };

    rsx! {
        if let Some(message) = banner {
            ErrorDisplay {
                message,
                on_dismiss: move |_| state.trip.write().dismiss_banner(),
            }
        }
        {body}
    }
}
