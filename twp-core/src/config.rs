//! Runtime configuration for the planner client.

/// Compile-time override for the backend base URL, e.g. `http://127.0.0.1:5000`.
pub const API_BASE_ENV: Option<&str> = option_env!("TWP_API_BASE");

/// Constants of the fallback flip-risk estimator.
///
/// The climatology bands and nudge size have no derivation behind them; they
/// are kept configurable rather than tuned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipConfig {
    /// Added to the threshold distance to avoid dividing by zero.
    pub epsilon: f64,
    /// `pct_of_normal` above this is unusual.
    pub unusual_above: f64,
    /// `pct_of_normal` below this is unusual.
    pub unusual_below: f64,
    /// Inclusive lower edge of the near-normal band.
    pub normal_low: f64,
    /// Inclusive upper edge of the near-normal band.
    pub normal_high: f64,
    /// Size of each climatology nudge.
    pub nudge: f64,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            unusual_above: 130.0,
            unusual_below: 70.0,
            normal_low: 90.0,
            normal_high: 110.0,
            nudge: 0.1,
        }
    }
}

/// Flip probability cut-offs for coloring uncertainty rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub bad: f64,
    pub warn: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self { bad: 0.7, warn: 0.3 }
    }
}

/// One entry of the data-source selector. An empty `value` is sent as no
/// `data_source` at all, leaving the choice to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub value: String,
    pub label: String,
}

impl DataSource {
    pub fn backend_default() -> Self {
        Self {
            value: String::new(),
            label: "Default".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Absolute base URL of the backend, without a trailing slash.
    pub api_base: String,
    /// Initial map center (lat, lon).
    pub map_center: (f64, f64),
    pub map_zoom: u8,
    pub flip: FlipConfig,
    pub risk: RiskThresholds,
    /// Selector options, backend default first.
    pub data_sources: Vec<DataSource>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE_ENV.unwrap_or("http://127.0.0.1:5000").to_string(),
            map_center: (39.5, -98.35),
            map_zoom: 4,
            flip: FlipConfig::default(),
            risk: RiskThresholds::default(),
            data_sources: vec![DataSource::backend_default()],
        }
    }
}

impl PlannerConfig {
    /// Default config served from `origin` unless a base was baked in at build time.
    pub fn for_origin(origin: &str) -> Self {
        let mut config = Self::default();
        if API_BASE_ENV.is_none() && !origin.is_empty() && origin != "null" {
            config.api_base = origin.to_string();
        }
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_origin_strips_trailing_slash() {
        if API_BASE_ENV.is_some() {
            return;
        }
        let config = PlannerConfig::for_origin("https://trips.example.org/");
        assert_eq!(config.api_base, "https://trips.example.org");
    }

    #[test]
    fn test_default_data_sources_only_backend_default() {
        let config = PlannerConfig::default();
        assert_eq!(config.data_sources, vec![DataSource::backend_default()]);
        assert!(config.data_sources[0].value.is_empty());
    }

    #[test]
    fn test_for_origin_ignores_opaque_origin() {
        if API_BASE_ENV.is_some() {
            return;
        }
        let config = PlannerConfig::for_origin("null");
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
    }
}
