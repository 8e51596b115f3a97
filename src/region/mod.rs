//! Administrative area code resolution.
//!
//! Geocoders report the administrative area either as a code ("CA") or as a
//! possibly localized name ("California"). This module derives the code on a
//! best-effort basis.

mod table;

use tracing::debug;

use crate::models::GeocodeResult;

pub use table::{RegionEntry, RegionTable};

/// Maps a country code and administrative area name to a standardized code
pub trait RegionCodeResolver: Send + Sync + 'static {
    /// Returns `None` when the area cannot be resolved
    fn resolve(&self, country_code: &str, admin_area: &str) -> Option<String>;
}

impl<F> RegionCodeResolver for F
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync + 'static,
{
    fn resolve(&self, country_code: &str, admin_area: &str) -> Option<String> {
        self(country_code, admin_area)
    }
}

/// Resolver that never resolves anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegionCodes;

impl RegionCodeResolver for NoRegionCodes {
    fn resolve(&self, _country_code: &str, _admin_area: &str) -> Option<String> {
        None
    }
}

/// Fill in `admin_area_code` on every match that has a country code and an
/// admin area but no code yet. Existing codes are never overwritten and
/// unresolved areas are left without a code.
pub fn fill_region_codes(result: GeocodeResult, resolver: &dyn RegionCodeResolver) -> GeocodeResult {
    result
        .into_iter()
        .map(|mut m| {
            if !m.needs_region_code() {
                return m;
            }
            if let (Some(country), Some(area)) = (&m.country_code, &m.admin_area) {
                m.admin_area_code = resolver.resolve(country, area);
                debug!(
                    "Region code for {}/{}: {:?}",
                    country, area, m.admin_area_code
                );
            }
            m
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressMatch;

    fn us_states(country: &str, area: &str) -> Option<String> {
        match (country, area) {
            ("US", "California") => Some("CA".to_string()),
            ("US", "Oregon") => Some("OR".to_string()),
            _ => None,
        }
    }

    fn m(country: Option<&str>, area: Option<&str>, code: Option<&str>) -> AddressMatch {
        AddressMatch {
            country_code: country.map(String::from),
            admin_area: area.map(String::from),
            admin_area_code: code.map(String::from),
            locality: Some("Somewhere".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_fills_missing_code() {
        let input = vec![m(Some("US"), Some("California"), None)];
        let out = fill_region_codes(input.clone(), &us_states);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].admin_area_code.as_deref(), Some("CA"));

        // Everything else untouched
        let mut expected = input[0].clone();
        expected.admin_area_code = Some("CA".to_string());
        assert_eq!(out[0], expected);
    }

    #[test]
    fn test_never_overwrites_existing_code() {
        let input = vec![m(Some("US"), Some("California"), Some("XX"))];
        let out = fill_region_codes(input, &us_states);
        assert_eq!(out[0].admin_area_code.as_deref(), Some("XX"));
    }

    #[test]
    fn test_unresolved_and_incomplete_matches_left_alone() {
        let input = vec![
            m(Some("US"), Some("Atlantis"), None),
            m(None, Some("California"), None),
            m(Some("US"), None, None),
        ];
        let out = fill_region_codes(input.clone(), &us_states);
        assert_eq!(out, input);
    }

    #[test]
    fn test_preserves_order_and_length() {
        let input = vec![
            m(Some("US"), Some("Oregon"), None),
            m(Some("US"), Some("Atlantis"), None),
            m(Some("US"), Some("California"), None),
        ];
        let out = fill_region_codes(input, &us_states);
        let codes: Vec<Option<&str>> = out.iter().map(|m| m.admin_area_code.as_deref()).collect();
        assert_eq!(codes, vec![Some("OR"), None, Some("CA")]);
    }

    #[test]
    fn test_no_region_codes() {
        let input = vec![m(Some("US"), Some("California"), None)];
        let out = fill_region_codes(input, &NoRegionCodes);
        assert!(out[0].admin_area_code.is_none());
    }
}
