//! Coordinate normalization and the selected map location.

use serde::{Deserialize, Serialize};

/// Name shown when reverse geocoding fails.
pub const UNKNOWN_PLACE: &str = "Unknown";

/// Timezone assumed when the timezone lookup fails.
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Clamp latitude into [-90, 90] and wrap longitude into [-180, 180).
pub fn normalize_coords(lat: f64, lon: f64) -> (f64, f64) {
    let lat = lat.clamp(-90.0, 90.0);
    let mut lon = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if lon >= 180.0 {
        lon -= 360.0;
    }
    (lat, lon)
}

/// A plain latitude/longitude pair as the backend sends it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

/// The single "current location" picked on the map.
///
/// `name` and `timezone` stay `None` until the lookups for this click resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedLocation {
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,
    pub timezone: Option<String>,
}

impl SelectedLocation {
    /// Build a location from a raw click, normalizing the coordinates.
    pub fn from_click(lat: f64, lon: f64) -> Self {
        let (lat, lon) = normalize_coords(lat, lon);
        Self {
            lat,
            lon,
            name: None,
            timezone: None,
        }
    }

    pub fn coords(&self) -> Coords {
        Coords {
            lat: self.lat,
            lon: self.lon,
        }
    }

    /// "37.7749, -122.4194" style label for the location badge.
    pub fn coords_label(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_clamps() {
        assert_eq!(normalize_coords(91.0, 0.0).0, 90.0);
        assert_eq!(normalize_coords(-123.0, 0.0).0, -90.0);
        assert_eq!(normalize_coords(45.5, 0.0).0, 45.5);
    }

    #[test]
    fn test_longitude_wraps_into_half_open_range() {
        assert_eq!(normalize_coords(0.0, 190.0).1, -170.0);
        assert_eq!(normalize_coords(0.0, 180.0).1, -180.0);
        assert_eq!(normalize_coords(0.0, -180.0).1, -180.0);
        assert_eq!(normalize_coords(0.0, -190.0).1, 170.0);
        assert_eq!(normalize_coords(0.0, 720.0).1, 0.0);
        assert_eq!(normalize_coords(0.0, -122.5).1, -122.5);
    }

    #[test]
    fn test_longitude_is_congruent_and_in_range() {
        let samples = [-1000.25, -540.0, -359.9, -1e-12, 0.0, 1e-9, 179.999, 359.0, 541.5, 12345.0];
        for lon in samples {
            let (_, wrapped) = normalize_coords(0.0, lon);
            assert!((-180.0..180.0).contains(&wrapped), "{} -> {}", lon, wrapped);
            let turns = (lon - wrapped) / 360.0;
            assert!((turns - turns.round()).abs() < 1e-9, "{} -> {}", lon, wrapped);
        }
    }

    #[test]
    fn test_from_click_normalizes() {
        let loc = SelectedLocation::from_click(91.0, 190.0);
        assert_eq!((loc.lat, loc.lon), (90.0, -170.0));
        assert_eq!(loc.name, None);
        assert_eq!(loc.coords_label(), "90.0000, -170.0000");
    }
}
