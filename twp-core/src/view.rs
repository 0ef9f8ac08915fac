//! Pure `PlanResult` -> view-model transforms.
//!
//! Components in the UI crate only format what these return, so the coloring
//! and grouping rules here are testable without a document.

use crate::api::csv_export_url;
use crate::config::{FlipConfig, RiskThresholds};
use crate::factor::Factor;
use crate::flip::fallback_flip_series;
use crate::plan::{PlanResult, SavedTrip};
use crate::state::CurrentResult;
use crate::time::{format_hour, format_range};

/// Traffic-light state used for condition and uncertainty rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorState {
    Good,
    Warn,
    Bad,
}

impl FactorState {
    pub fn label(self) -> &'static str {
        match self {
            FactorState::Good => "ok",
            FactorState::Warn => "uncertain",
            FactorState::Bad => "at risk",
        }
    }
}

/// Worst case across hours: any explicit fail is bad, all explicit passes are
/// good, anything else (mixed with unknowns, all unknown, no hours) is warn.
pub fn factor_state(flags: &[Option<bool>]) -> FactorState {
    if flags.iter().any(|f| *f == Some(false)) {
        FactorState::Bad
    } else if !flags.is_empty() && flags.iter().all(|f| *f == Some(true)) {
        FactorState::Good
    } else {
        FactorState::Warn
    }
}

/// Row state for a condition. Per-hour flags decide when any is known;
/// otherwise the backend's own verdict for the condition is used.
pub fn condition_state(flags: &[Option<bool>], verdict: Option<bool>) -> FactorState {
    if flags.iter().any(Option::is_some) {
        return factor_state(flags);
    }
    match verdict {
        Some(true) => FactorState::Good,
        Some(false) => FactorState::Bad,
        None => FactorState::Warn,
    }
}

/// Color for a flip probability; unknown counts as warn.
pub fn risk_state(probability: Option<f64>, thresholds: &RiskThresholds) -> FactorState {
    match probability {
        Some(p) if p >= thresholds.bad => FactorState::Bad,
        Some(p) if p >= thresholds.warn => FactorState::Warn,
        Some(_) => FactorState::Good,
        None => FactorState::Warn,
    }
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = format!("{:.1}", v);
            rounded
                .strip_suffix(".0")
                .map(str::to_string)
                .unwrap_or(rounded)
        }
        _ => "—".to_string(),
    }
}

fn format_probability(p: Option<f64>) -> String {
    match p {
        Some(p) => format!("{:.0}%", p * 100.0),
        None => "—".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub meets: Option<bool>,
    pub headline: String,
    pub timezone: String,
    /// "5 of 6 hours OK", when the backend sent hourly evaluations.
    pub hours_ok: Option<String>,
    pub violations: Vec<String>,
}

pub fn summary_view(result: &PlanResult) -> SummaryView {
    let headline = result.summary.clone().unwrap_or_else(|| match result.meets {
        Some(true) => "All selected hours meet your conditions.".to_string(),
        Some(false) => "Some hours violate your conditions.".to_string(),
        None => "Trip evaluated.".to_string(),
    });
    let hours_ok = (!result.hourly.is_empty()).then(|| {
        let ok = result.hourly.iter().filter(|h| h.ok == Some(true)).count();
        format!("{} of {} hours OK", ok, result.hourly.len())
    });
    SummaryView {
        meets: result.meets,
        headline,
        timezone: result.timezone.clone().unwrap_or_else(|| "UTC".to_string()),
        hours_ok,
        violations: result
            .violations
            .iter()
            .map(|s| format_range(&s.start, &s.end))
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRow {
    pub factor: Factor,
    pub label: String,
    pub range: String,
    pub state: FactorState,
}

/// One row per reported condition, in factor display order.
pub fn condition_rows(result: &PlanResult) -> Vec<ConditionRow> {
    result
        .factors()
        .into_iter()
        .filter_map(|factor| {
            let cond = result.condition(factor)?;
            let label = if cond.label.is_empty() {
                factor.label().to_string()
            } else {
                cond.label.clone()
            };
            let range = format!(
                "{} – {} {}",
                format_value(cond.min),
                format_value(cond.max),
                cond.unit
            )
            .trim_end()
            .to_string();
            Some(ConditionRow {
                factor,
                label,
                range,
                state: condition_state(&result.factor_flags(factor), cond.ok),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpanGroup {
    pub label: String,
    pub ranges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionsView {
    pub unideal: Vec<SpanGroup>,
    pub alternatives: Vec<SpanGroup>,
}

impl SuggestionsView {
    pub fn is_empty(&self) -> bool {
        self.unideal.is_empty() && self.alternatives.is_empty()
    }
}

fn direction_label(direction: &str) -> String {
    match direction {
        "before" => "Earlier".to_string(),
        "after" => "Later".to_string(),
        "" => "Other".to_string(),
        other => other.to_string(),
    }
}

/// Unideal spans grouped by factor, alternative windows grouped by direction.
pub fn suggestions_view(result: &PlanResult) -> SuggestionsView {
    let unideal = Factor::ALL
        .into_iter()
        .filter_map(|factor| {
            let spans = result.unideal_spans.get(factor.key())?;
            if spans.is_empty() {
                return None;
            }
            Some(SpanGroup {
                label: factor.label().to_string(),
                ranges: spans.iter().map(|s| format_range(&s.start, &s.end)).collect(),
            })
        })
        .collect();

    let mut directions: Vec<&str> = vec!["before", "after"];
    for alt in &result.alt_windows {
        if !directions.contains(&alt.direction.as_str()) {
            directions.push(alt.direction.as_str());
        }
    }
    let alternatives = directions
        .into_iter()
        .filter_map(|direction| {
            let ranges: Vec<String> = result
                .alt_windows
                .iter()
                .filter(|a| a.direction == direction)
                .map(|a| format_range(&a.start, &a.end))
                .collect();
            (!ranges.is_empty()).then(|| SpanGroup {
                label: direction_label(direction),
                ranges,
            })
        })
        .collect();

    SuggestionsView {
        unideal,
        alternatives,
    }
}

/// Where a flip series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipSource {
    Backend,
    Estimate,
}

impl FlipSource {
    pub fn label(self) -> &'static str {
        match self {
            FlipSource::Backend => "backend",
            FlipSource::Estimate => "estimate",
        }
    }
}

/// Backend flip probabilities when present, otherwise the local estimate.
pub fn flip_series(current: &CurrentResult, factor: Factor, config: &FlipConfig) -> (Vec<Option<f64>>, FlipSource) {
    let result = &current.result;
    if let Some(series) = result.backend_flip(factor) {
        return (series, FlipSource::Backend);
    }
    let estimate = fallback_flip_series(
        result.series_for(factor),
        current.prefs.thresholds.bounds(factor),
        result.pct_of_normal(factor),
        config,
    );
    (estimate, FlipSource::Estimate)
}

#[derive(Debug, Clone, PartialEq)]
pub struct UncertaintyRow {
    pub factor: Factor,
    pub label: String,
    pub peak: String,
    pub state: FactorState,
    pub known_hours: usize,
    pub climatology: Option<String>,
    pub source: FlipSource,
}

pub fn uncertainty_rows(current: &CurrentResult, flip: &FlipConfig, risk: &RiskThresholds) -> Vec<UncertaintyRow> {
    let result = &current.result;
    result
        .factors()
        .into_iter()
        .map(|factor| {
            let (series, source) = flip_series(current, factor, flip);
            let known: Vec<f64> = series.iter().flatten().copied().collect();
            let peak = known.iter().copied().reduce(f64::max);
            UncertaintyRow {
                factor,
                label: factor.label().to_string(),
                peak: format_probability(peak),
                state: risk_state(peak, risk),
                known_hours: known.len(),
                climatology: result
                    .pct_of_normal(factor)
                    .map(|pct| format!("{:.0}% of normal", pct)),
                source,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub time: String,
    pub value: String,
    pub ideal: Option<bool>,
    pub overall_ok: Option<bool>,
    pub reasons: String,
    pub flip: String,
    pub flip_state: FactorState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactorDetail {
    pub factor: Factor,
    pub title: String,
    pub unit: String,
    pub rows: Vec<DetailRow>,
    pub csv_url: Option<String>,
}

/// Hour-by-hour table for the per-factor modal. Built only when opened.
pub fn factor_detail(
    current: &CurrentResult,
    factor: Factor,
    api_base: &str,
    flip: &FlipConfig,
    risk: &RiskThresholds,
) -> FactorDetail {
    let result = &current.result;
    let values = result.series_for(factor);
    let flags = result.factor_flags(factor);
    let (probabilities, _) = flip_series(current, factor, flip);
    let unit = result
        .condition(factor)
        .map(|c| c.unit.clone())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| current.prefs.units.label(factor).to_string());

    let hours = result.hourly.len().max(values.len());
    let rows = (0..hours)
        .map(|i| {
            let hour = result.hourly.get(i);
            let p = probabilities.get(i).copied().flatten();
            DetailRow {
                time: hour
                    .map(|h| format_hour(&h.time))
                    .unwrap_or_else(|| format!("Hour {}", i + 1)),
                value: format_value(values.get(i).copied().flatten()),
                ideal: flags.get(i).copied().flatten(),
                overall_ok: hour.and_then(|h| h.ok),
                reasons: hour.map(|h| h.reasons.join(", ")).unwrap_or_default(),
                flip: format_probability(p),
                flip_state: risk_state(p, risk),
            }
        })
        .collect();

    FactorDetail {
        factor,
        title: factor.label().to_string(),
        unit,
        rows,
        csv_url: result
            .trip_id
            .as_deref()
            .map(|id| csv_export_url(api_base, id, factor)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    pub id: String,
    pub name: String,
    pub window: String,
    pub timezone: String,
    pub verdict: &'static str,
}

pub fn trip_rows(trips: &[SavedTrip]) -> Vec<TripRow> {
    trips
        .iter()
        .map(|trip| TripRow {
            id: trip.id.clone(),
            name: if trip.name.is_empty() {
                trip.id.clone()
            } else {
                trip.name.clone()
            },
            window: format_range(&trip.window.start_local, &trip.window.end_local),
            timezone: trip.timezone.clone().unwrap_or_default(),
            verdict: match trip.last_verdict() {
                Some(true) => "✅ Meets",
                Some(false) => "❌ Violations",
                None => "—",
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::Preferences;
    use serde_json::json;

    fn current(value: serde_json::Value, prefs: Preferences) -> CurrentResult {
        CurrentResult {
            result: serde_json::from_value(value).unwrap(),
            prefs,
        }
    }

    #[test]
    fn test_factor_state_rule() {
        assert_eq!(factor_state(&[Some(true), Some(true)]), FactorState::Good);
        assert_eq!(factor_state(&[Some(true), Some(false), Some(true)]), FactorState::Bad);
        assert_eq!(factor_state(&[Some(false), None]), FactorState::Bad);
        assert_eq!(factor_state(&[Some(true), None]), FactorState::Warn);
        assert_eq!(factor_state(&[None, None]), FactorState::Warn);
        assert_eq!(factor_state(&[]), FactorState::Warn);
    }

    #[test]
    fn test_risk_state_thresholds() {
        let t = RiskThresholds::default();
        assert_eq!(risk_state(Some(0.7), &t), FactorState::Bad);
        assert_eq!(risk_state(Some(0.69), &t), FactorState::Warn);
        assert_eq!(risk_state(Some(0.3), &t), FactorState::Warn);
        assert_eq!(risk_state(Some(0.29), &t), FactorState::Good);
        assert_eq!(risk_state(None, &t), FactorState::Warn);
    }

    #[test]
    fn test_condition_rows_order_and_color() {
        let c = current(
            json!({
                "conditions": [
                    {"key": "wind", "label": "Wind Speed", "min": 3.24, "max": 12.0, "unit": "mph", "ok": true},
                    {"key": "temp", "label": "Temperature", "min": null, "max": 71.04, "unit": "F", "ok": false},
                ],
                "hourly_factor_ok": [{"wind": true, "temp": true}, {"wind": true, "temp": false}],
            }),
            Preferences::default(),
        );
        let rows = condition_rows(&c.result);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].factor, Factor::Temp);
        assert_eq!(rows[0].state, FactorState::Bad);
        assert_eq!(rows[0].range, "— – 71 F");
        assert_eq!(rows[1].state, FactorState::Good);
        assert_eq!(rows[1].range, "3.2 – 12 mph");
    }

    #[test]
    fn test_condition_state_falls_back_to_verdict() {
        let c = current(
            json!({
                "conditions": [
                    {"key": "wind", "ok": false},
                    {"key": "temp", "ok": true},
                    {"key": "humidity"},
                ],
            }),
            Preferences::default(),
        );
        let rows = condition_rows(&c.result);
        let states: Vec<FactorState> = rows.iter().map(|r| r.state).collect();
        assert_eq!(states, vec![FactorState::Good, FactorState::Warn, FactorState::Bad]);
    }

    #[test]
    fn test_condition_state_hourly_flags_win() {
        assert_eq!(condition_state(&[Some(true), None], Some(false)), FactorState::Warn);
        assert_eq!(condition_state(&[None, None], Some(false)), FactorState::Bad);
        assert_eq!(condition_state(&[], None), FactorState::Warn);
        assert_eq!(condition_state(&[Some(false)], Some(true)), FactorState::Bad);
    }

    #[test]
    fn test_suggestions_grouping() {
        let c = current(
            json!({
                "unideal_spans": {
                    "wind": [{"start": "2025-06-01T10:00", "end": "2025-06-01T12:00"}],
                    "temp": [],
                },
                "alt_windows": [
                    {"start": "2025-06-01T14:00", "end": "2025-06-01T16:00", "direction": "after"},
                    {"start": "2025-06-01T04:00", "end": "2025-06-01T06:00", "direction": "before"},
                ],
            }),
            Preferences::default(),
        );
        let view = suggestions_view(&c.result);
        assert_eq!(view.unideal.len(), 1);
        assert_eq!(view.unideal[0].label, "Wind Speed");
        assert_eq!(view.unideal[0].ranges, vec!["Sun Jun 1, 10:00 → 12:00"]);
        let labels: Vec<&str> = view.alternatives.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Earlier", "Later"]);
    }

    #[test]
    fn test_uncertainty_falls_back_to_estimate() {
        let mut prefs = Preferences::default();
        prefs.thresholds.temp_max = Some(80.0);
        let c = current(
            json!({
                "conditions": [{"key": "temp"}, {"key": "humidity"}],
                "series": {"temp": [70.0, 70.0, 70.0], "humidity": [50.0, 60.0]},
                "climatology": {"temp": {"pct_of_normal": 100.0}},
            }),
            prefs,
        );
        let rows = uncertainty_rows(&c, &FlipConfig::default(), &RiskThresholds::default());
        let temp = &rows[0];
        assert_eq!(temp.source, FlipSource::Estimate);
        assert_eq!(temp.source.label(), "estimate");
        assert_eq!(temp.peak, "0%");
        assert_eq!(temp.state, FactorState::Good);
        assert_eq!(temp.climatology.as_deref(), Some("100% of normal"));
        // humidity has no bounds: every hour unknown, row is warn
        let humidity = &rows[1];
        assert_eq!(humidity.known_hours, 0);
        assert_eq!(humidity.state, FactorState::Warn);
    }

    #[test]
    fn test_uncertainty_prefers_backend_series() {
        let c = current(
            json!({
                "conditions": [{"key": "wind"}],
                "hourly_flip": [{"wind": 0.2}, {"wind": 0.75}],
            }),
            Preferences::default(),
        );
        let rows = uncertainty_rows(&c, &FlipConfig::default(), &RiskThresholds::default());
        assert_eq!(rows[0].source, FlipSource::Backend);
        assert_eq!(rows[0].source.label(), "backend");
        assert_eq!(rows[0].peak, "75%");
        assert_eq!(rows[0].state, FactorState::Bad);
    }

    #[test]
    fn test_factor_detail_rows_and_csv() {
        let mut prefs = Preferences::default();
        prefs.thresholds.wind_max = Some(20.0);
        let c = current(
            json!({
                "id": "t42",
                "conditions": [{"key": "wind", "unit": "mph"}],
                "hourly": [
                    {"time": "2025-06-01T10:00", "ok": true, "reasons": []},
                    {"time": "2025-06-01T11:00", "ok": false, "reasons": ["wind_high"]},
                ],
                "series": {"wind": [10.0, 25.0]},
            }),
            prefs,
        );
        let detail = factor_detail(&c, Factor::Wind, "http://h", &FlipConfig::default(), &RiskThresholds::default());
        assert_eq!(detail.unit, "mph");
        assert_eq!(detail.rows.len(), 2);
        assert_eq!(detail.rows[0].time, "Jun 1 10:00");
        assert_eq!(detail.rows[1].value, "25");
        assert_eq!(detail.rows[1].ideal, Some(false));
        assert_eq!(detail.rows[1].overall_ok, Some(false));
        assert_eq!(detail.rows[1].reasons, "wind_high");
        // slope 15 vs distance 5 clamps to 1
        assert_eq!(detail.rows[1].flip, "100%");
        assert_eq!(
            detail.csv_url.as_deref(),
            Some("http://h/api/trip/t42/csv?factor=wind&with_summary=1")
        );
    }

    #[test]
    fn test_summary_view() {
        let c = current(
            json!({
                "meets": false,
                "timezone": "America/Denver",
                "hourly": [{"ok": true}, {"ok": false}],
                "violations": [{"start": "2025-06-01T11:00", "end": "2025-06-01T11:00"}],
            }),
            Preferences::default(),
        );
        let view = summary_view(&c.result);
        assert_eq!(view.headline, "Some hours violate your conditions.");
        assert_eq!(view.hours_ok.as_deref(), Some("1 of 2 hours OK"));
        assert_eq!(view.violations.len(), 1);
    }

    #[test]
    fn test_trip_rows() {
        let trips: Vec<SavedTrip> = serde_json::from_value(json!([
            {"id": "t1", "name": "", "last_result": {"meets": true}},
            {"id": "t2", "name": "Beach", "timezone": "UTC"},
        ]))
        .unwrap();
        let rows = trip_rows(&trips);
        assert_eq!(rows[0].name, "t1");
        assert_eq!(rows[0].verdict, "✅ Meets");
        assert_eq!(rows[1].verdict, "—");
        assert_eq!(rows[1].timezone, "UTC");
    }
}
