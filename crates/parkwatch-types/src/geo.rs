//! Geographic position of parks and lodges.

use serde::{Deserialize, Serialize};

/// A `(latitude, longitude)` pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Return the pair as a `(latitude, longitude)` tuple.
    pub const fn as_tuple(self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(c: Coordinates) -> Self {
        c.as_tuple()
    }
}
