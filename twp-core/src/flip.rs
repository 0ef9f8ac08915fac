//! Fallback flip-risk estimator.
//!
//! When the backend sends no per-hour flip probabilities for a factor, this
//! estimates how likely each hour's ideal/non-ideal verdict is to flip:
//! steep local change close to a threshold means high risk. It is a local
//! proxy with no access to ensemble or historical variance data.

use crate::config::FlipConfig;
use crate::prefs::Bounds;

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Largest absolute change to a finite neighbor, 0 when there is none.
fn local_slope(values: &[Option<f64>], i: usize, v: f64) -> f64 {
    let prev = i.checked_sub(1).and_then(|j| finite(values[j]));
    let next = values.get(i + 1).copied().and_then(finite);
    [prev, next]
        .into_iter()
        .flatten()
        .map(|n| (v - n).abs())
        .fold(0.0, f64::max)
}

/// Distance to the nearest defined bound, `None` without bounds.
fn threshold_distance(v: f64, bounds: Bounds) -> Option<f64> {
    [bounds.min, bounds.max]
        .into_iter()
        .flatten()
        .filter(|b| b.is_finite())
        .map(|b| (v - b).abs())
        .reduce(f64::min)
}

/// Shift a probability by the climatology signal.
///
/// The "unusual" and "near normal" checks are independent. With the default
/// bands they cannot both hold, but a custom `FlipConfig` can make both fire.
pub fn climatology_nudge(p: f64, pct_of_normal: Option<f64>, config: &FlipConfig) -> f64 {
    let Some(pct) = pct_of_normal.filter(|v| v.is_finite()) else {
        return p;
    };
    let mut p = p;
    if pct > config.unusual_above || pct < config.unusual_below {
        p += config.nudge;
    }
    if (config.normal_low..=config.normal_high).contains(&pct) {
        p -= config.nudge;
    }
    p.clamp(0.0, 1.0)
}

/// Per-hour flip probability for one factor's series (display units).
///
/// The output has the same length as `values`; `None` marks an unknown hour.
pub fn fallback_flip_series(
    values: &[Option<f64>],
    bounds: Bounds,
    pct_of_normal: Option<f64>,
    config: &FlipConfig,
) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let v = finite(*value)?;
            let slope = local_slope(values, i, v);
            let distance = threshold_distance(v, bounds)?;
            let raw = (slope / (distance + config.epsilon)).clamp(0.0, 1.0);
            Some(climatology_nudge(raw, pct_of_normal, config))
        })
        .collect()
}
