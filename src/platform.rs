//! Platform-specific request selection.

use crate::geocoder::Locale;

/// Platform family the on-device geocoder runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Platform family of the compile target
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Ios
        }
    }
}

/// Decides how the facade issues region-code lookups
pub trait PlatformProfile: Send + Sync + 'static {
    /// Locale to force on reverse geocoding so the admin area comes back in
    /// a resolvable form, or `None` to issue the ordinary request.
    fn region_code_locale(&self) -> Option<Locale>;
}

impl PlatformProfile for Platform {
    fn region_code_locale(&self) -> Option<Locale> {
        match self {
            // Some Android devices report the localized state name instead
            // of the code documented for Address.getAdminArea().
            Platform::Android => Some(Locale::EN_US),
            // CLGeocoder already reports the code.
            Platform::Ios => None,
        }
    }
}
