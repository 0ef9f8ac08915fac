//! Flip-risk table: how likely each factor's verdict is to flip.

use dioxus::prelude::*;
use twp_core::view::{FlipSource, UncertaintyRow};

use super::{state_style, PANEL_STYLE};

#[component]
pub fn UncertaintyPanel(rows: Vec<UncertaintyRow>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }
    let any_estimate = rows.iter().any(|r| r.source == FlipSource::Estimate);
    let lines: Vec<(UncertaintyRow, String)> = rows
        .into_iter()
        .map(|row| {
            let style = format!("{} padding: 4px 8px;", state_style(row.state));
            (row, style)
        })
        .collect();

    rsx! {
        div {
            style: PANEL_STYLE,
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Uncertainty" }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        th { style: "text-align: left;", "Factor" }
                        th { style: "text-align: left;", "Peak flip risk" }
                        th { style: "text-align: left;", "Hours known" }
                        th { style: "text-align: left;", "Climatology" }
                        th { style: "text-align: left;", "Source" }
                    }
                }
                tbody {
                    for (row, style) in lines {
                        tr {
                            key: "{row.label}",
                            td { "{row.label}" }
                            td { style: "{style}", "{row.peak}" }
                            td { "{row.known_hours}" }
                            td { {row.climatology.clone().unwrap_or_else(|| "—".to_string())} }
                            td { style: "color: #888;", {row.source.label()} }
                        }
                    }
                }
            }
            if any_estimate {
                p {
                    style: "font-size: 11px; color: #888; margin: 6px 0 0 0;",
                    "Some values are local estimates from hourly change near your thresholds."
                }
            }
        }
    }
}
