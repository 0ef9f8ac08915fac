//! Selected location, resolved name and timezone badge.

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn LocationBadge() -> Element {
    let state = use_context::<AppState>();
    let trip = state.trip.read();
    let notice = trip.notice().map(str::to_string);

    let Some(location) = trip.location().cloned() else {
        return rsx! {
            div { style: "margin: 8px 0; color: #888;", "No location selected." }
        };
    };
    let name = location
        .name
        .clone()
        .unwrap_or_else(|| "Resolving…".to_string());
    let timezone = location.timezone.clone().unwrap_or_else(|| "…".to_string());
    let coords = location.coords_label();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            strong { "{name}" }
            span { style: "font-size: 12px; color: #666;", "({coords})" }
            span {
                style: "font-size: 12px; padding: 2px 8px; border-radius: 10px; background: #E3F2FD; color: #1565C0;",
                "TZ: {timezone}"
            }
        }
        if let Some(notice) = notice {
            div {
                style: "font-size: 12px; padding: 6px 10px; background: #FFF8E1; color: #8D6E00; border-radius: 4px;",
                "{notice}"
            }
        }
    }
}
