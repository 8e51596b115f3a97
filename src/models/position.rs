//! Geographic position passed to the geocoders.

use serde::{Deserialize, Deserializer, Serialize};

/// Geographic point (lat/lng)
///
/// Missing or `null` fields deserialize as `0.0`, which [`Position::is_valid`]
/// rejects the same way it rejects an explicit zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, deserialize_with = "nullable_coordinate")]
    pub lat: f64,
    #[serde(default, deserialize_with = "nullable_coordinate")]
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates must be set and non-zero.
    ///
    /// A point lying exactly on the equator or the prime meridian is
    /// therefore reported as invalid. Callers geocoding such points need to
    /// nudge the coordinate themselves.
    pub fn is_valid(&self) -> bool {
        is_set(self.lat) && is_set(self.lng)
    }
}

fn is_set(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

fn nullable_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}
