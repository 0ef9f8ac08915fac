//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Heading before the message
    #[props(default = "Error: ".to_string())]
    pub title: String,
    /// Called when the user dismisses the box; no close button without it
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; display: flex; justify-content: space-between;",
            span {
                strong { "{props.title}" }
                "{props.message}"
            }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    style: "border: none; background: none; color: #C62828; cursor: pointer;",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
        }
    }
}
