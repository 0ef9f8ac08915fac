//! Factor checkboxes, unit selectors and threshold inputs.

use dioxus::prelude::*;
use twp_core::prefs::{PrecipUnit, PreferenceForm, TempUnit, WindUnit};
use twp_core::Factor;

use crate::state::AppState;

/// Which text field of the form a threshold input edits.
#[derive(Clone, Copy, PartialEq)]
enum Field {
    PrecipProbMax,
    PrecipAmtMax,
    TempMin,
    TempMax,
    HumidityMin,
    HumidityMax,
    WindMin,
    WindMax,
}

impl Field {
    fn slot(self, form: &mut PreferenceForm) -> &mut String {
        match self {
            Field::PrecipProbMax => &mut form.precip_prob_max,
            Field::PrecipAmtMax => &mut form.precip_amt_max,
            Field::TempMin => &mut form.temp_min,
            Field::TempMax => &mut form.temp_max,
            Field::HumidityMin => &mut form.humidity_min,
            Field::HumidityMax => &mut form.humidity_max,
            Field::WindMin => &mut form.wind_min,
            Field::WindMax => &mut form.wind_max,
        }
    }

    fn value(self, form: &PreferenceForm) -> String {
        match self {
            Field::PrecipProbMax => form.precip_prob_max.clone(),
            Field::PrecipAmtMax => form.precip_amt_max.clone(),
            Field::TempMin => form.temp_min.clone(),
            Field::TempMax => form.temp_max.clone(),
            Field::HumidityMin => form.humidity_min.clone(),
            Field::HumidityMax => form.humidity_max.clone(),
            Field::WindMin => form.wind_min.clone(),
            Field::WindMax => form.wind_max.clone(),
        }
    }
}

fn bounds_for(factor: Factor) -> (Option<Field>, Field) {
    match factor {
        Factor::PrecipProb => (None, Field::PrecipProbMax),
        Factor::PrecipAmt => (None, Field::PrecipAmtMax),
        Factor::Temp => (Some(Field::TempMin), Field::TempMax),
        Factor::Humidity => (Some(Field::HumidityMin), Field::HumidityMax),
        Factor::Wind => (Some(Field::WindMin), Field::WindMax),
    }
}

/// Unit choices for factors the user can switch units on.
fn unit_options(factor: Factor) -> Vec<&'static str> {
    match factor {
        Factor::Temp => TempUnit::OPTIONS.iter().map(|u| u.as_str()).collect(),
        Factor::Wind => WindUnit::OPTIONS.iter().map(|u| u.as_str()).collect(),
        Factor::PrecipAmt => PrecipUnit::OPTIONS.iter().map(|u| u.as_str()).collect(),
        Factor::PrecipProb | Factor::Humidity => Vec::new(),
    }
}

fn unit_value(form: &PreferenceForm, factor: Factor) -> String {
    match factor {
        Factor::Temp => form.temp_unit.clone(),
        Factor::Wind => form.wind_unit.clone(),
        Factor::PrecipAmt => form.precip_unit.clone(),
        Factor::PrecipProb | Factor::Humidity => "%".to_string(),
    }
}

fn set_unit(form: &mut PreferenceForm, factor: Factor, value: String) {
    match factor {
        Factor::Temp => form.temp_unit = value,
        Factor::Wind => form.wind_unit = value,
        Factor::PrecipAmt => form.precip_unit = value,
        Factor::PrecipProb | Factor::Humidity => {}
    }
}

#[component]
pub fn PreferencesForm() -> Element {
    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 6px; padding: 8px 12px;",
            legend { style: "font-weight: bold;", "Conditions to check" }
            for factor in Factor::ALL {
                FactorRow { key: "{factor:?}", factor }
            }
        }
    }
}

#[component]
fn FactorRow(factor: Factor) -> Element {
    let mut state = use_context::<AppState>();
    let form = state.prefs_form.read().clone();
    let checked = form.consider.get(factor);
    let (min_field, max_field) = bounds_for(factor);
    let units = unit_options(factor);
    let unit = unit_value(&form, factor);
    let factor_label = factor.label();

    rsx! {
        div {
            style: "display: flex; gap: 10px; align-items: center; margin: 4px 0; flex-wrap: wrap;",
            label {
                style: "min-width: 170px; font-weight: 500;",
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |evt: Event<FormData>| {
                        state.prefs_form.write().consider.set(factor, evt.checked());
                    },
                }
                " {factor_label}"
            }
            if let Some(field) = min_field {
                ThresholdInput { bound: "min", field_value: field.value(&form), disabled: !checked,
                    on_change: move |value: String| *field.slot(&mut state.prefs_form.write()) = value,
                }
            }
            ThresholdInput { bound: "max", field_value: max_field.value(&form), disabled: !checked,
                on_change: move |value: String| *max_field.slot(&mut state.prefs_form.write()) = value,
            }
            if units.is_empty() {
                span { style: "color: #666;", "%" }
            } else {
                select {
                    disabled: !checked,
                    onchange: move |evt: Event<FormData>| {
                        set_unit(&mut state.prefs_form.write(), factor, evt.value());
                    },
                    for option_unit in units {
                        option {
                            value: "{option_unit}",
                            selected: option_unit == unit,
                            "{option_unit}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThresholdInput(
    bound: &'static str,
    field_value: String,
    disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            style: "font-size: 13px; color: #555;",
            "{bound} "
            input {
                r#type: "number",
                step: "any",
                value: "{field_value}",
                disabled,
                style: "width: 70px;",
                oninput: move |evt: Event<FormData>| on_change.call(evt.value()),
            }
        }
    }
}
