//! Geobridge - A geocoding facade with remote fallback
//!
//! This library wraps an on-device geocoder, falls back to a remote service
//! when the device capability is unavailable, and fills in standardized
//! administrative-area codes on a best-effort basis.

pub mod config;
pub mod error;
pub mod facade;
pub mod geocoder;
pub mod models;
pub mod platform;
pub mod region;

pub use config::FacadeConfig;
pub use error::{ErrorKind, GeocodeError, Result};
pub use facade::{GeocodingFacade, GeocodingFacadeBuilder};
pub use geocoder::{Locale, LocalGeocoder, RemoteGeocoder};
pub use models::{AddressMatch, GeocodeResult, Position};
pub use platform::{Platform, PlatformProfile};
pub use region::{fill_region_codes, NoRegionCodes, RegionCodeResolver, RegionTable};
