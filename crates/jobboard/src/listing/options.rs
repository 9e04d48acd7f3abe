use super::normalize::SIZE_BUCKETS;
use crate::model::{CompanyRecord, NOT_SPECIFIED};
use serde::Serialize;
use std::collections::BTreeMap;

/// Values offered by the filter controls, derived from the companies actually loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Industries and tags, alphabetical.
    pub industries: Vec<String>,
    /// Size buckets, smallest first; labels that are not standard buckets follow.
    pub sizes: Vec<String>,
    /// Locations, alphabetical.
    pub locations: Vec<String>,
}

impl FilterOptions {
    /// Distinct values across `records`, compared case-insensitively (the first
    /// spelling seen is kept). Placeholder values are left out.
    pub fn collect(records: &[CompanyRecord]) -> Self {
        let mut industries = Distinct::default();
        let mut sizes = Distinct::default();
        let mut locations = Distinct::default();

        for record in records {
            industries.add(&record.industry);
            for tag in &record.tags {
                industries.add(tag);
            }
            sizes.add(&record.size);
            locations.add(&record.location);
        }

        let mut sizes = sizes.into_sorted();
        sizes.sort_by_key(|s| {
            SIZE_BUCKETS
                .iter()
                .position(|b| *b == s.as_str())
                .unwrap_or(SIZE_BUCKETS.len())
        });

        Self {
            industries: industries.into_sorted(),
            sizes,
            locations: locations.into_sorted(),
        }
    }
}

#[derive(Default)]
struct Distinct(BTreeMap<String, String>);

impl Distinct {
    fn add(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() || value == NOT_SPECIFIED {
            return;
        }
        self.0
            .entry(value.to_lowercase())
            .or_insert_with(|| value.to_string());
    }

    fn into_sorted(self) -> Vec<String> {
        self.0.into_values().collect()
    }
}
