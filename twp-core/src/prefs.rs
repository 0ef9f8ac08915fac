//! Preference reader: form values -> structured `Preferences`.
//!
//! Thresholds that are empty or not a finite number are `None` and serialize
//! as JSON `null`. A `None` bound means "no bound", never "bound at zero".

use crate::factor::Factor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TempUnit {
    #[default]
    C,
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindUnit {
    #[default]
    #[serde(rename = "mph")]
    Mph,
    #[serde(rename = "m/s")]
    MetersPerSecond,
    #[serde(rename = "km/h")]
    KilometersPerHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrecipUnit {
    #[serde(rename = "in")]
    Inches,
    #[default]
    #[serde(rename = "mm")]
    Millimeters,
}

impl TempUnit {
    pub const OPTIONS: [TempUnit; 2] = [TempUnit::C, TempUnit::F];

    pub fn as_str(self) -> &'static str {
        match self {
            TempUnit::C => "C",
            TempUnit::F => "F",
        }
    }

    /// Parse a form value, falling back to the default for anything unknown.
    pub fn from_form(value: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|u| u.as_str() == value.trim())
            .unwrap_or_default()
    }
}

impl WindUnit {
    pub const OPTIONS: [WindUnit; 3] = [
        WindUnit::Mph,
        WindUnit::MetersPerSecond,
        WindUnit::KilometersPerHour,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WindUnit::Mph => "mph",
            WindUnit::MetersPerSecond => "m/s",
            WindUnit::KilometersPerHour => "km/h",
        }
    }

    pub fn from_form(value: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|u| u.as_str() == value.trim())
            .unwrap_or_default()
    }
}

impl PrecipUnit {
    pub const OPTIONS: [PrecipUnit; 2] = [PrecipUnit::Inches, PrecipUnit::Millimeters];

    pub fn as_str(self) -> &'static str {
        match self {
            PrecipUnit::Inches => "in",
            PrecipUnit::Millimeters => "mm",
        }
    }

    pub fn from_form(value: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|u| u.as_str() == value.trim())
            .unwrap_or_default()
    }
}

/// Which factors the backend should check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Consider {
    pub precip_prob: bool,
    pub precip_amt: bool,
    pub temp: bool,
    pub humidity: bool,
    pub wind: bool,
}

impl Consider {
    pub fn get(&self, factor: Factor) -> bool {
        match factor {
            Factor::PrecipProb => self.precip_prob,
            Factor::PrecipAmt => self.precip_amt,
            Factor::Temp => self.temp,
            Factor::Humidity => self.humidity,
            Factor::Wind => self.wind,
        }
    }

    pub fn set(&mut self, factor: Factor, on: bool) {
        match factor {
            Factor::PrecipProb => self.precip_prob = on,
            Factor::PrecipAmt => self.precip_amt = on,
            Factor::Temp => self.temp = on,
            Factor::Humidity => self.humidity = on,
            Factor::Wind => self.wind = on,
        }
    }

    pub fn factors(&self) -> Vec<Factor> {
        Factor::ALL.into_iter().filter(|f| self.get(*f)).collect()
    }
}

/// Display units per factor. Conversion is done by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Units {
    pub temp: TempUnit,
    pub wind: WindUnit,
    pub precip_amt: PrecipUnit,
}

impl Units {
    /// Unit label for a factor's values.
    pub fn label(&self, factor: Factor) -> &'static str {
        match factor {
            Factor::PrecipProb | Factor::Humidity => "%",
            Factor::PrecipAmt => self.precip_amt.as_str(),
            Factor::Temp => self.temp.as_str(),
            Factor::Wind => self.wind.as_str(),
        }
    }
}

/// Optional numeric bounds. Precipitation only has an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub precip_prob_max: Option<f64>,
    pub precip_amt_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity_min: Option<f64>,
    pub humidity_max: Option<f64>,
    pub wind_min: Option<f64>,
    pub wind_max: Option<f64>,
}

/// A (min, max) pair for one factor; either side may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Thresholds {
    pub fn bounds(&self, factor: Factor) -> Bounds {
        match factor {
            Factor::PrecipProb => Bounds {
                min: None,
                max: self.precip_prob_max,
            },
            Factor::PrecipAmt => Bounds {
                min: None,
                max: self.precip_amt_max,
            },
            Factor::Temp => Bounds {
                min: self.temp_min,
                max: self.temp_max,
            },
            Factor::Humidity => Bounds {
                min: self.humidity_min,
                max: self.humidity_max,
            },
            Factor::Wind => Bounds {
                min: self.wind_min,
                max: self.wind_max,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub consider: Consider,
    pub units: Units,
    pub thresholds: Thresholds,
}

impl Preferences {
    /// Lenient decode of the `prefs` blob stored with a saved trip.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            log::warn!("Saved trip preferences not understood, using defaults: {}", e);
            Self::default()
        })
    }
}

/// Raw form-control values, exactly as the inputs hold them.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceForm {
    pub consider: Consider,
    pub temp_unit: String,
    pub wind_unit: String,
    pub precip_unit: String,
    pub precip_prob_max: String,
    pub precip_amt_max: String,
    pub temp_min: String,
    pub temp_max: String,
    pub humidity_min: String,
    pub humidity_max: String,
    pub wind_min: String,
    pub wind_max: String,
}

impl Default for PreferenceForm {
    fn default() -> Self {
        Self {
            consider: Consider {
                precip_prob: true,
                precip_amt: false,
                temp: true,
                humidity: false,
                wind: true,
            },
            temp_unit: TempUnit::F.as_str().to_string(),
            wind_unit: WindUnit::Mph.as_str().to_string(),
            precip_unit: PrecipUnit::Inches.as_str().to_string(),
            precip_prob_max: "30".to_string(),
            precip_amt_max: String::new(),
            temp_min: "50".to_string(),
            temp_max: "85".to_string(),
            humidity_min: String::new(),
            humidity_max: String::new(),
            wind_min: String::new(),
            wind_max: "20".to_string(),
        }
    }
}

/// Parse a numeric input; empty, garbage and non-finite values are unset.
pub fn parse_threshold(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Build `Preferences` from the current form values.
pub fn read_preferences(form: &PreferenceForm) -> Preferences {
    Preferences {
        consider: form.consider,
        units: Units {
            temp: TempUnit::from_form(&form.temp_unit),
            wind: WindUnit::from_form(&form.wind_unit),
            precip_amt: PrecipUnit::from_form(&form.precip_unit),
        },
        thresholds: Thresholds {
            precip_prob_max: parse_threshold(&form.precip_prob_max),
            precip_amt_max: parse_threshold(&form.precip_amt_max),
            temp_min: parse_threshold(&form.temp_min),
            temp_max: parse_threshold(&form.temp_max),
            humidity_min: parse_threshold(&form.humidity_min),
            humidity_max: parse_threshold(&form.humidity_max),
            wind_min: parse_threshold(&form.wind_min),
            wind_max: parse_threshold(&form.wind_max),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("12.5"), Some(12.5));
        assert_eq!(parse_threshold("  -3 "), Some(-3.0));
        assert_eq!(parse_threshold("0"), Some(0.0));
        assert_eq!(parse_threshold(""), None);
        assert_eq!(parse_threshold("abc"), None);
        assert_eq!(parse_threshold("NaN"), None);
        assert_eq!(parse_threshold("inf"), None);
    }

    #[test]
    fn test_empty_fields_serialize_as_null() {
        let mut form = PreferenceForm::default();
        form.temp_min = String::new();
        form.wind_max = "nope".to_string();
        let prefs = read_preferences(&form);
        let value = serde_json::to_value(prefs).unwrap();
        assert_eq!(value["thresholds"]["temp_min"], json!(null));
        assert_eq!(value["thresholds"]["wind_max"], json!(null));
        assert_eq!(value["thresholds"]["temp_max"], json!(85.0));
    }

    #[test]
    fn test_units_serialize_to_wire_strings() {
        let mut form = PreferenceForm::default();
        form.wind_unit = "km/h".to_string();
        form.temp_unit = "F".to_string();
        form.precip_unit = "mm".to_string();
        let value = serde_json::to_value(read_preferences(&form)).unwrap();
        assert_eq!(value["units"], json!({"temp": "F", "wind": "km/h", "precip_amt": "mm"}));
    }

    #[test]
    fn test_unknown_units_fall_back_to_defaults() {
        let mut form = PreferenceForm::default();
        form.temp_unit = "K".to_string();
        form.wind_unit = "knots".to_string();
        form.precip_unit = String::new();
        let units = read_preferences(&form).units;
        assert_eq!(units.temp, TempUnit::C);
        assert_eq!(units.wind, WindUnit::Mph);
        assert_eq!(units.precip_amt, PrecipUnit::Millimeters);
    }

    #[test]
    fn test_bounds_per_factor() {
        let prefs = read_preferences(&PreferenceForm::default());
        let temp = prefs.thresholds.bounds(Factor::Temp);
        assert_eq!((temp.min, temp.max), (Some(50.0), Some(85.0)));
        let pp = prefs.thresholds.bounds(Factor::PrecipProb);
        assert_eq!((pp.min, pp.max), (None, Some(30.0)));
        assert_eq!(prefs.thresholds.bounds(Factor::Humidity), Bounds::default());
    }

    #[test]
    fn test_from_value_is_lenient() {
        let prefs = Preferences::from_value(&json!({"consider": {"temp": true}, "units": {"temp": "F"}}));
        assert!(prefs.consider.temp);
        assert!(!prefs.consider.wind);
        assert_eq!(prefs.units.temp, TempUnit::F);

        let fallback = Preferences::from_value(&json!("garbage"));
        assert_eq!(fallback, Preferences::default());
    }
}
