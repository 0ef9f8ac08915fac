//! Per-factor detail modal with an hour-by-hour table and CSV export link.

use dioxus::prelude::*;
use twp_core::view::FactorDetail;

use super::state_style;
use crate::state::AppState;

fn yes_no(flag: Option<bool>, yes: &'static str, no: &'static str) -> &'static str {
    match flag {
        Some(true) => yes,
        Some(false) => no,
        None => "—",
    }
}

#[component]
pub fn FactorModal(detail: FactorDetail) -> Element {
    let mut state = use_context::<AppState>();
    let title = format!("{} ({})", detail.title, detail.unit);
    let rows: Vec<_> = detail
        .rows
        .iter()
        .map(|row| {
            (
                row.clone(),
                yes_no(row.ideal, "yes", "no"),
                yes_no(row.overall_ok, "ok", "no-go"),
                format!("{} padding: 2px 6px;", state_style(row.flip_state)),
                row.flip_state.label(),
            )
        })
        .collect();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 1000;",
            onclick: move |_| state.modal_factor.set(None),
            div {
                style: "background: #fff; border-radius: 8px; padding: 16px; max-width: 820px; width: 95%; max-height: 80vh; overflow: auto;",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    h3 { style: "margin: 0;", "{title}" }
                    button {
                        style: "border: none; background: none; font-size: 18px; cursor: pointer;",
                        onclick: move |_| state.modal_factor.set(None),
                        "✕"
                    }
                }
                if let Some(url) = detail.csv_url.as_ref() {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener",
                        style: "font-size: 13px;",
                        "Download CSV"
                    }
                }
                if rows.is_empty() {
                    p { style: "color: #888;", "No hourly data for this factor." }
                } else {
                    table {
                        style: "width: 100%; border-collapse: collapse; font-size: 13px; margin-top: 8px;",
                        thead {
                            tr {
                                th { style: "text-align: left;", "Time" }
                                th { style: "text-align: right;", "Value" }
                                th { "Ideal" }
                                th { "Overall" }
                                th { style: "text-align: left;", "Reasons" }
                                th { "Flip risk" }
                            }
                        }
                        tbody {
                            for (row, ideal, overall, flip_style, flip_label) in rows {
                                tr {
                                    key: "{row.time}",
                                    td { "{row.time}" }
                                    td { style: "text-align: right;", "{row.value}" }
                                    td { style: "text-align: center;", "{ideal}" }
                                    td { style: "text-align: center;", "{overall}" }
                                    td { "{row.reasons}" }
                                    td {
                                        style: "{flip_style}",
                                        title: "{flip_label}",
                                        "{row.flip}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
