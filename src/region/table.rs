//! In-memory region code table.

use anyhow::{Context, Result};
use hashbrown::HashMap;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use super::RegionCodeResolver;

/// One row of a region table: `country_code,name,code`
#[derive(Debug, Clone, Deserialize)]
pub struct RegionEntry {
    pub country_code: String,
    pub name: String,
    pub code: String,
}

/// Lookup table from (country code, area name) to area code.
///
/// Country codes and names are matched case-insensitively. An admin area
/// that is already a known code for its country resolves to itself.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    /// (COUNTRY, lowercased name) -> code
    by_name: HashMap<(String, String), String>,
    /// (COUNTRY, UPPERCASED code) -> code as stored
    by_code: HashMap<(String, String), String>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single entry. A later entry for the same name replaces the earlier one.
    pub fn insert(&mut self, country_code: &str, name: &str, code: &str) {
        let country = country_code.trim().to_uppercase();
        let code = code.trim();
        self.by_name
            .insert((country.clone(), name.trim().to_lowercase()), code.to_string());
        self.by_code
            .insert((country, code.to_uppercase()), code.to_string());
    }

    /// Load entries from a CSV file with a `country_code,name,code` header
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open region table {}", path.display()))?;

        let mut table = Self::new();
        for row in reader.deserialize() {
            let entry: RegionEntry = row.context("Failed to parse region table row")?;
            table.insert(&entry.country_code, &entry.name, &entry.code);
        }

        info!(
            "Loaded {} region names from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Number of distinct names in the table
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<RegionEntry> for RegionTable {
    fn from_iter<I: IntoIterator<Item = RegionEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(&entry.country_code, &entry.name, &entry.code);
        }
        table
    }
}

impl RegionCodeResolver for RegionTable {
    fn resolve(&self, country_code: &str, admin_area: &str) -> Option<String> {
        let country = country_code.trim().to_uppercase();
        let area = admin_area.trim();

        if let Some(code) = self.by_name.get(&(country.clone(), area.to_lowercase())) {
            return Some(code.clone());
        }
        self.by_code.get(&(country, area.to_uppercase())).cloned()
    }
}
