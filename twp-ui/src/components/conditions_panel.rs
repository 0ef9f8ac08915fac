//! Per-factor condition boxes; clicking one opens its detail modal.

use dioxus::prelude::*;
use twp_core::view::ConditionRow;

use super::{state_style, PANEL_STYLE};
use crate::state::AppState;

#[component]
pub fn ConditionsPanel(rows: Vec<ConditionRow>) -> Element {
    let mut state = use_context::<AppState>();

    if rows.is_empty() {
        return rsx! {};
    }
    let boxes: Vec<(ConditionRow, String)> = rows
        .into_iter()
        .map(|row| {
            let style = format!("{} padding: 8px; border-radius: 4px; cursor: pointer;", state_style(row.state));
            (row, style)
        })
        .collect();

    rsx! {
        div {
            style: PANEL_STYLE,
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Conditions" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 8px;",
                for (row, style) in boxes {
                    div {
                        key: "{row.label}",
                        style: "{style}",
                        title: "Show hour-by-hour details",
                        onclick: move |_| state.modal_factor.set(Some(row.factor)),
                        div { style: "font-weight: bold;", "{row.label}" }
                        div { style: "font-size: 13px;", "{row.range}" }
                    }
                }
            }
        }
    }
}
