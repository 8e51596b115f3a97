//! Geocoding collaborators consumed by the facade.
//!
//! The crate does not ship geocoder implementations: the on-device geocoder
//! and the remote HTTP client are provided by the embedding application.

use futures::future::BoxFuture;

use crate::error::Result;
use crate::models::{GeocodeResult, Position};

/// Language and region pair used to force a geocoder's output locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub language: &'static str,
    pub region: &'static str,
}

impl Locale {
    pub const EN_US: Locale = Locale {
        language: "en",
        region: "US",
    };
}

/// On-device geocoding capability.
///
/// Failures carry an [`ErrorKind`](crate::ErrorKind); `NotAvailable` is the
/// signal that lets the facade fall back to a [`RemoteGeocoder`].
pub trait LocalGeocoder: Send + Sync + 'static {
    /// Reverse geocode a position in the device's locale
    fn geocode_position(&self, position: Position) -> BoxFuture<'_, Result<GeocodeResult>>;

    /// Reverse geocode a position with results localized to `language`/`region`
    fn geocode_localized_position<'a>(
        &'a self,
        language: &'a str,
        region: &'a str,
        position: Position,
    ) -> BoxFuture<'a, Result<GeocodeResult>>;

    /// Forward geocode a free-form address
    fn geocode_address<'a>(&'a self, address: &'a str) -> BoxFuture<'a, Result<GeocodeResult>>;
}

/// Remote geocoding service authenticated by an API key
pub trait RemoteGeocoder: Send + Sync + 'static {
    fn geocode_position<'a>(
        &'a self,
        api_key: &'a str,
        position: Position,
    ) -> BoxFuture<'a, Result<GeocodeResult>>;

    fn geocode_address<'a>(
        &'a self,
        api_key: &'a str,
        address: &'a str,
    ) -> BoxFuture<'a, Result<GeocodeResult>>;
}
