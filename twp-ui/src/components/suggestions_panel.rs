//! Unideal spans per factor and alternative windows per direction.

use dioxus::prelude::*;
use twp_core::view::{SpanGroup, SuggestionsView};

use super::PANEL_STYLE;

#[component]
pub fn SuggestionsPanel(view: SuggestionsView) -> Element {
    if view.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: PANEL_STYLE,
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Suggestions" }
            if !view.unideal.is_empty() {
                GroupList { title: "Unideal periods (±6h around your window)", groups: view.unideal.clone() }
            }
            if !view.alternatives.is_empty() {
                GroupList { title: "Alternative windows of the same length", groups: view.alternatives.clone() }
            }
        }
    }
}

#[component]
fn GroupList(title: &'static str, groups: Vec<SpanGroup>) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h4 { style: "margin: 4px 0; font-size: 14px; color: #444;", "{title}" }
            for group in groups {
                div {
                    key: "{group.label}",
                    style: "font-size: 13px; margin: 2px 0;",
                    strong { "{group.label}: " }
                    for range in group.ranges.iter() {
                        span { style: "margin-right: 10px;", "{range}" }
                    }
                }
            }
        }
    }
}
