//! Wire types for the plan request, plan result and saved trips.
//!
//! Results are server-defined and parsed leniently: every field defaults, and
//! per-factor maps are keyed by the raw wire string so an unknown factor from a
//! newer backend does not fail the whole response.

use crate::factor::Factor;
use crate::geo::Coords;
use crate::prefs::Preferences;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Trip name sent when the user leaves the field blank.
pub const UNTITLED_TRIP: &str = "Untitled Trip";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripWindow {
    #[serde(default)]
    pub start_local: String,
    #[serde(default)]
    pub end_local: String,
}

/// Body of `POST /api/plan_trip`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRequest {
    pub trip_name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    pub window: TripWindow,
    pub prefs: Preferences,
}

/// Per-hour evaluation across all factors.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HourEval {
    pub time: String,
    pub ok: Option<bool>,
    pub reasons: Vec<String>,
}

/// Observed min/max for one considered factor.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ConditionSummary {
    pub key: String,
    pub label: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: String,
    pub ok: Option<bool>,
}

/// A contiguous time range (ISO-8601 strings).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Span {
    pub start: String,
    pub end: String,
}

/// A suggested alternative window of equal duration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AltWindow {
    pub start: String,
    pub end: String,
    pub direction: String,
}

/// Climatology comparison for one factor; `pct_of_normal` 100 is normal.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Climatology {
    pub pct_of_normal: Option<f64>,
    pub normal: Option<f64>,
    pub note: Option<String>,
}

/// Response of `POST /api/plan_trip`, also stored as a saved trip's `last_result`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PlanResult {
    #[serde(alias = "id")]
    pub trip_id: Option<String>,
    pub meets: Option<bool>,
    pub summary: Option<String>,
    pub timezone: Option<String>,
    pub hourly: Vec<HourEval>,
    pub conditions: Vec<ConditionSummary>,
    pub violations: Vec<Span>,
    pub unideal_spans: BTreeMap<String, Vec<Span>>,
    pub alt_windows: Vec<AltWindow>,
    pub climatology: BTreeMap<String, Climatology>,
    pub hourly_factor_ok: Vec<BTreeMap<String, Option<bool>>>,
    pub hourly_flip: Vec<BTreeMap<String, Option<f64>>>,
    pub series: BTreeMap<String, Vec<Option<f64>>>,
    pub no_data_for_window: bool,
    pub message: Option<String>,
}

impl PlanResult {
    pub fn condition(&self, factor: Factor) -> Option<&ConditionSummary> {
        self.conditions.iter().find(|c| c.key == factor.key())
    }

    /// Factors the backend reported conditions for, in display order.
    pub fn factors(&self) -> Vec<Factor> {
        Factor::ALL
            .into_iter()
            .filter(|f| self.condition(*f).is_some())
            .collect()
    }

    pub fn series_for(&self, factor: Factor) -> &[Option<f64>] {
        self.series
            .get(factor.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn pct_of_normal(&self, factor: Factor) -> Option<f64> {
        self.climatology
            .get(factor.key())
            .and_then(|c| c.pct_of_normal)
    }

    /// Per-hour pass/fail flags for one factor.
    ///
    /// Uses `hourly_factor_ok` when present. Older backends only send
    /// `hourly[].reasons`, so for factors with a condition row the flag is
    /// derived from whether any reason maps to the factor.
    pub fn factor_flags(&self, factor: Factor) -> Vec<Option<bool>> {
        if !self.hourly_factor_ok.is_empty() {
            return self
                .hourly_factor_ok
                .iter()
                .map(|hour| hour.get(factor.key()).copied().flatten())
                .collect();
        }
        if self.condition(factor).is_none() {
            return vec![None; self.hourly.len()];
        }
        self.hourly
            .iter()
            .map(|hour| {
                Some(
                    !hour
                        .reasons
                        .iter()
                        .any(|r| Factor::from_reason(r) == Some(factor)),
                )
            })
            .collect()
    }

    /// Backend flip probabilities for a factor, or `None` when it sent none.
    pub fn backend_flip(&self, factor: Factor) -> Option<Vec<Option<f64>>> {
        let series: Vec<Option<f64>> = self
            .hourly_flip
            .iter()
            .map(|hour| hour.get(factor.key()).copied().flatten())
            .collect();
        if series.iter().any(Option::is_some) {
            Some(series)
        } else {
            None
        }
    }
}

/// A saved trip as returned by `/api/trips` and `/api/trip/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SavedTrip {
    pub id: String,
    pub name: String,
    pub window: TripWindow,
    pub timezone: Option<String>,
    pub coords: Option<Coords>,
    pub prefs: serde_json::Value,
    pub last_result: Option<PlanResult>,
}

impl SavedTrip {
    pub fn last_verdict(&self) -> Option<bool> {
        self.last_result.as_ref().and_then(|r| r.meets)
    }

    /// The trip's last result prepared for display as a fresh plan result.
    pub fn into_result(self) -> Option<(PlanResult, Preferences)> {
        let prefs = Preferences::from_value(&self.prefs);
        let mut result = self.last_result?;
        if result.trip_id.is_none() {
            result.trip_id = Some(self.id);
        }
        if result.timezone.is_none() {
            result.timezone = self.timezone;
        }
        Some((result, prefs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_from(value: serde_json::Value) -> PlanResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_result_parses() {
        let result = result_from(json!({"ok": true, "meets": true, "summary": "fine"}));
        assert_eq!(result.meets, Some(true));
        assert!(result.hourly.is_empty());
        assert!(!result.no_data_for_window);
    }

    #[test]
    fn test_unknown_factor_keys_are_tolerated() {
        let result = result_from(json!({
            "series": {"temp": [1.0, null], "visibility": [3.0]},
            "hourly_factor_ok": [{"temp": true, "visibility": false}],
        }));
        assert_eq!(result.series_for(Factor::Temp), &[Some(1.0), None]);
        assert_eq!(result.factor_flags(Factor::Temp), vec![Some(true)]);
    }

    #[test]
    fn test_factor_flags_from_explicit_map() {
        let result = result_from(json!({
            "hourly_factor_ok": [{"wind": true}, {"wind": false}, {"wind": null}, {}],
        }));
        assert_eq!(
            result.factor_flags(Factor::Wind),
            vec![Some(true), Some(false), None, None]
        );
    }

    #[test]
    fn test_factor_flags_derived_from_reasons() {
        let result = result_from(json!({
            "conditions": [{"key": "temp", "label": "Temperature", "ok": false}],
            "hourly": [
                {"time": "2025-06-01T10:00", "ok": true, "reasons": []},
                {"time": "2025-06-01T11:00", "ok": false, "reasons": ["temp_high", "wind_high"]},
            ],
        }));
        assert_eq!(result.factor_flags(Factor::Temp), vec![Some(true), Some(false)]);
        // wind has no condition row, so nothing is known about it
        assert_eq!(result.factor_flags(Factor::Wind), vec![None, None]);
    }

    #[test]
    fn test_backend_flip_requires_a_value() {
        let result = result_from(json!({
            "hourly_flip": [{"temp": null}, {"temp": 0.4}, {"wind": null}],
        }));
        assert_eq!(result.backend_flip(Factor::Temp), Some(vec![None, Some(0.4), None]));
        assert_eq!(result.backend_flip(Factor::Wind), None);
    }

    #[test]
    fn test_saved_trip_into_result_fills_gaps() {
        let trip: SavedTrip = serde_json::from_value(json!({
            "id": "t1700000000",
            "name": "Hike",
            "timezone": "America/Denver",
            "coords": {"lat": 39.7, "lon": -105.0},
            "window": {"start_local": "2025-06-01T08:00", "end_local": "2025-06-01T12:00"},
            "prefs": {"units": {"temp": "F"}},
            "last_result": {"meets": false, "violations": [{"start": "a", "end": "b"}]},
        }))
        .unwrap();
        assert_eq!(trip.last_verdict(), Some(false));
        let (result, prefs) = trip.into_result().unwrap();
        assert_eq!(result.trip_id.as_deref(), Some("t1700000000"));
        assert_eq!(result.timezone.as_deref(), Some("America/Denver"));
        assert_eq!(result.violations.len(), 1);
        assert_eq!(prefs.units.temp, crate::prefs::TempUnit::F);
    }

    #[test]
    fn test_plan_request_omits_missing_data_source() {
        let req = PlanRequest {
            trip_name: "x".to_string(),
            lat: 1.0,
            lon: 2.0,
            data_source: None,
            window: TripWindow::default(),
            prefs: Preferences::default(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("data_source").is_none());
        assert!(value["prefs"]["thresholds"].get("temp_min").is_some());
    }
}
