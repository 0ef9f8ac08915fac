//! Summary header: verdict, summary text, timezone.

use dioxus::prelude::*;
use twp_core::view::{FactorState, SummaryView};

use super::{state_style, PANEL_STYLE};

#[component]
pub fn SummaryPanel(view: SummaryView) -> Element {
    let verdict = match view.meets {
        Some(true) => FactorState::Good,
        Some(false) => FactorState::Bad,
        None => FactorState::Warn,
    };
    let badge = format!("{} padding: 8px 12px; border-radius: 4px; font-weight: bold;", state_style(verdict));

    rsx! {
        div {
            style: PANEL_STYLE,
            div { style: "{badge}", "{view.headline}" }
            div {
                style: "font-size: 12px; color: #666; margin-top: 6px; display: flex; gap: 16px;",
                span { "Timezone: {view.timezone}" }
                if let Some(hours) = view.hours_ok.as_ref() {
                    span { "{hours}" }
                }
            }
            if !view.violations.is_empty() {
                div {
                    style: "margin-top: 8px; font-size: 13px;",
                    strong { "Violating hours:" }
                    ul {
                        style: "margin: 4px 0; padding-left: 20px;",
                        for range in view.violations.iter() {
                            li { "{range}" }
                        }
                    }
                }
            }
        }
    }
}
