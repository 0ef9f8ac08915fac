//! Dioxus RSX components for the planner panels.

mod conditions_panel;
mod error_display;
mod factor_modal;
mod loading_spinner;
mod location_badge;
mod map_panel;
mod preferences_form;
mod result_panels;
mod suggestions_panel;
mod summary_panel;
mod trip_form;
mod trips_list;
mod uncertainty_panel;

pub use conditions_panel::ConditionsPanel;
pub use error_display::ErrorDisplay;
pub use factor_modal::FactorModal;
pub use loading_spinner::LoadingSpinner;
pub use location_badge::LocationBadge;
pub use map_panel::MapPanel;
pub use preferences_form::PreferencesForm;
pub use result_panels::ResultPanels;
pub use suggestions_panel::SuggestionsPanel;
pub use summary_panel::SummaryPanel;
pub use trip_form::TripForm;
pub use trips_list::TripsList;
pub use uncertainty_panel::UncertaintyPanel;

use twp_core::view::FactorState;

/// Inline style for a good/warn/bad box.
pub(crate) fn state_style(state: FactorState) -> &'static str {
    match state {
        FactorState::Good => "background: #E8F5E9; border: 1px solid #A5D6A7; color: #2E7D32;",
        FactorState::Warn => "background: #FFF8E1; border: 1px solid #FFE082; color: #F57F17;",
        FactorState::Bad => "background: #FFEBEE; border: 1px solid #EF9A9A; color: #C62828;",
    }
}

pub(crate) const PANEL_STYLE: &str =
    "margin: 12px 0; padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 6px; background: #fff;";
