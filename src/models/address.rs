//! Address match records returned by the geocoders.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Position;

/// Ordered list of matches for a single geocoding request
pub type GeocodeResult = Vec<AddressMatch>;

/// A single geocoded address.
///
/// Every field is optional; geocoders fill in what they know. Fields this
/// type does not name are kept in `extra` so that no collaborator data is
/// lost on the way through the facade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Full human-readable address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,

    /// Name of the feature at the address (e.g. a landmark)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_locality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// ISO 3166-1 alpha-2 country code (e.g. "US")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Administrative area as reported by the geocoder; may be a code ("CA")
    /// or a localized name ("California", "Kalifornien")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_area: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_admin_area: Option<String>,

    /// Standardized administrative area code (e.g. "CA")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_area_code: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AddressMatch {
    /// Whether a region code can and should be derived for this match
    pub fn needs_region_code(&self) -> bool {
        self.country_code.is_some() && self.admin_area.is_some() && self.admin_area_code.is_none()
    }
}
