//! The five weather factors a trip can be checked against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A weather factor. The declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    PrecipProb,
    PrecipAmt,
    Temp,
    Humidity,
    Wind,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::PrecipProb,
        Factor::PrecipAmt,
        Factor::Temp,
        Factor::Humidity,
        Factor::Wind,
    ];

    /// Wire key used by the backend in maps and query strings.
    pub fn key(self) -> &'static str {
        match self {
            Factor::PrecipProb => "precip_prob",
            Factor::PrecipAmt => "precip_amt",
            Factor::Temp => "temp",
            Factor::Humidity => "humidity",
            Factor::Wind => "wind",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Factor::PrecipProb => "Precip. Probability",
            Factor::PrecipAmt => "Precip. Amount",
            Factor::Temp => "Temperature",
            Factor::Humidity => "Humidity",
            Factor::Wind => "Wind Speed",
        }
    }

    /// Map a granular backend reason code (e.g. `temp_low`) to its factor.
    pub fn from_reason(reason: &str) -> Option<Factor> {
        match reason {
            "temp_low" | "temp_high" => Some(Factor::Temp),
            "humidity_low" | "humidity_high" => Some(Factor::Humidity),
            "wind_low" | "wind_high" => Some(Factor::Wind),
            other => other.parse().ok(),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Factor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::ALL
            .into_iter()
            .find(|factor| factor.key() == s)
            .ok_or_else(|| format!("unknown factor: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip_through_from_str() {
        for factor in Factor::ALL {
            assert_eq!(factor.key().parse::<Factor>(), Ok(factor));
        }
        assert!("pressure".parse::<Factor>().is_err());
    }

    #[test]
    fn test_from_reason_maps_granular_codes() {
        assert_eq!(Factor::from_reason("temp_low"), Some(Factor::Temp));
        assert_eq!(Factor::from_reason("humidity_high"), Some(Factor::Humidity));
        assert_eq!(Factor::from_reason("wind_low"), Some(Factor::Wind));
        assert_eq!(Factor::from_reason("precip_amt"), Some(Factor::PrecipAmt));
        assert_eq!(Factor::from_reason("fog"), None);
    }

    #[test]
    fn test_serde_uses_wire_keys() {
        let json = serde_json::to_string(&Factor::PrecipProb).unwrap();
        assert_eq!(json, "\"precip_prob\"");
    }
}
