//! Geographic store location.

use serde::{Deserialize, Serialize};

/// A latitude/longitude coordinate pair.
///
/// Serializes as a 2-element array (`[latitude, longitude]`) so snapshots
/// stay a plain tree of primitives.
///
/// ## Examples
///
/// ```
/// use crumbtrail_core::Location;
///
/// let loc = Location::new(40.7128, -74.0060);
/// assert_eq!(serde_json::to_string(&loc).unwrap(), "[40.7128,-74.006]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<[f64; 2]> for Location {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Location> for [f64; 2] {
    fn from(location: Location) -> Self {
        [location.latitude, location.longitude]
    }
}
