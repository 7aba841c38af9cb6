use crate::Substance;
use sw_core::units::{Temperature, constants::standard_atmosphere};

/// One listing row for the substance catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub substance: Substance,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl CatalogEntry {
    fn of(substance: Substance) -> Self {
        Self {
            substance,
            canonical_id: substance.key(),
            display_name: substance.display_name(),
            aliases: substance.aliases(),
        }
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self.aliases.iter().any(|alias| alias.contains(&query))
    }

    /// Normal boiling point, when the Antoine inverse converges.
    pub fn normal_boiling_point(&self) -> Option<Temperature> {
        self.substance.boiling_point(standard_atmosphere()).ok()
    }
}

/// Every tabulated substance, ordered by key.
pub fn catalog() -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = Substance::ALL.into_iter().map(CatalogEntry::of).collect();
    entries.sort_by_key(|e| e.canonical_id);
    entries
}

pub fn filter_catalog(query: &str) -> Vec<CatalogEntry> {
    catalog()
        .into_iter()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
