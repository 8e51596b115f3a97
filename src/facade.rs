//! Geocoding facade with remote fallback.
//!
//! Every request goes to the on-device geocoder first. When that geocoder
//! reports [`ErrorKind::NotAvailable`](crate::ErrorKind::NotAvailable) and a
//! remote API key is configured, the same request is sent once to the remote
//! geocoder. Any other failure is returned to the caller unchanged.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::config::FacadeConfig;
use crate::error::{GeocodeError, Result};
use crate::geocoder::{LocalGeocoder, RemoteGeocoder};
use crate::models::{GeocodeResult, Position};
use crate::platform::{Platform, PlatformProfile};
use crate::region::{fill_region_codes, NoRegionCodes, RegionCodeResolver};

pub struct GeocodingFacade {
    local: Box<dyn LocalGeocoder>,
    remote: Option<Box<dyn RemoteGeocoder>>,
    resolver: Box<dyn RegionCodeResolver>,
    profile: Box<dyn PlatformProfile>,
    config: RwLock<FacadeConfig>,
}

impl GeocodingFacade {
    /// Facade with defaults for everything but the local geocoder
    pub fn new<L: LocalGeocoder>(local: L) -> Self {
        Self::builder(local).build()
    }

    pub fn builder<L: LocalGeocoder>(local: L) -> GeocodingFacadeBuilder {
        GeocodingFacadeBuilder {
            local: Box::new(local),
            remote: None,
            resolver: Box::new(NoRegionCodes),
            profile: Box::new(Platform::current()),
            config: FacadeConfig::default(),
        }
    }

    /// Enable the remote fallback with `api_key`, replacing any earlier key.
    ///
    /// Requests already in flight keep the key they started with.
    pub fn configure_fallback(&self, api_key: impl Into<String>) {
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_api_key(api_key);
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> FacadeConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reverse geocode a position
    pub async fn geocode_position(&self, position: Position) -> Result<GeocodeResult> {
        if !position.is_valid() {
            return Err(GeocodeError::InvalidPosition);
        }

        match self.local.geocode_position(position).await {
            Ok(result) => Ok(result),
            Err(err) => match self.fallback(&err) {
                Some((remote, api_key)) => remote.geocode_position(&api_key, position).await,
                None => Err(err),
            },
        }
    }

    /// Reverse geocode a position and fill in `admin_area_code` where it can
    /// be derived from the country code and admin area name.
    pub async fn geocode_position_with_region_code(
        &self,
        position: Position,
    ) -> Result<GeocodeResult> {
        if !position.is_valid() {
            return Err(GeocodeError::InvalidPosition);
        }

        let local = match self.profile.region_code_locale() {
            Some(locale) => {
                self.local
                    .geocode_localized_position(locale.language, locale.region, position)
                    .await
            }
            None => self.local.geocode_position(position).await,
        };

        let result = match local {
            Ok(result) => result,
            Err(err) => match self.fallback(&err) {
                Some((remote, api_key)) => remote.geocode_position(&api_key, position).await?,
                None => return Err(err),
            },
        };

        Ok(fill_region_codes(result, self.resolver.as_ref()))
    }

    /// Forward geocode a free-form address
    pub async fn geocode_address(&self, address: &str) -> Result<GeocodeResult> {
        if address.is_empty() {
            return Err(GeocodeError::MissingAddress);
        }

        match self.local.geocode_address(address).await {
            Ok(result) => Ok(result),
            Err(err) => match self.fallback(&err) {
                Some((remote, api_key)) => remote.geocode_address(&api_key, address).await,
                None => Err(err),
            },
        }
    }

    /// Remote geocoder and key to retry with, if the local failure allows it
    fn fallback(&self, err: &GeocodeError) -> Option<(&dyn RemoteGeocoder, String)> {
        if !err.is_not_available() {
            return None;
        }
        let api_key = self.config().api_key()?.to_string();
        let remote = self.remote.as_deref()?;

        debug!("Local geocoder unavailable, falling back to remote geocoder");
        Some((remote, api_key))
    }
}

pub struct GeocodingFacadeBuilder {
    local: Box<dyn LocalGeocoder>,
    remote: Option<Box<dyn RemoteGeocoder>>,
    resolver: Box<dyn RegionCodeResolver>,
    profile: Box<dyn PlatformProfile>,
    config: FacadeConfig,
}

impl GeocodingFacadeBuilder {
    pub fn remote<R: RemoteGeocoder>(mut self, remote: R) -> Self {
        self.remote = Some(Box::new(remote));
        self
    }

    pub fn region_resolver<R: RegionCodeResolver>(mut self, resolver: R) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Override platform detection (e.g. `Platform::Android`)
    pub fn platform<P: PlatformProfile>(mut self, profile: P) -> Self {
        self.profile = Box::new(profile);
        self
    }

    pub fn config(mut self, config: FacadeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> GeocodingFacade {
        GeocodingFacade {
            local: self.local,
            remote: self.remote,
            resolver: self.resolver,
            profile: self.profile,
            config: RwLock::new(self.config),
        }
    }
}
