//! Read-only community catalog.
//!
//! Wraps the preset table with lookup operations. The catalog has no side
//! effects and no errors beyond "not found"; callers treat absence as
//! silently skippable.

use strum::IntoEnumIterator;

use super::model::{Community, CommunityCategory};
use super::preset::default_communities;

/// Immutable lookup table over the community entries.
#[derive(Debug, Clone)]
pub struct CommunityCatalog {
    entries: Vec<Community>,
}

impl CommunityCatalog {
    /// Creates a catalog from an explicit entry list.
    pub fn new(entries: Vec<Community>) -> Self {
        Self { entries }
    }

    /// Creates a catalog holding the built-in presets.
    pub fn with_defaults() -> Self {
        Self::new(default_communities())
    }

    /// Looks up a single community by identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Community> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Returns all entries in display order.
    pub fn all(&self) -> &[Community] {
        &self.entries
    }

    /// Returns the entries belonging to one category, in display order.
    pub fn by_category(&self, category: CommunityCategory) -> Vec<&Community> {
        self.entries
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Returns the catalog grouped by category, in category declaration
    /// order. Categories without entries are omitted.
    pub fn grouped(&self) -> Vec<(CommunityCategory, Vec<&Community>)> {
        CommunityCategory::iter()
            .map(|category| (category, self.by_category(category)))
            .filter(|(_, entries)| !entries.is_empty())
            .collect()
    }

    /// Resolves selected identifiers to catalog entries.
    ///
    /// Unknown identifiers are silently dropped; the result preserves
    /// catalog order regardless of selection order.
    pub fn resolve(&self, ids: &[String]) -> Vec<&Community> {
        self.entries
            .iter()
            .filter(|c| ids.iter().any(|id| id == &c.id))
            .collect()
    }
}

impl Default for CommunityCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let catalog = CommunityCatalog::with_defaults();
        let dcinside = catalog.find_by_id("dcinside").unwrap();
        assert_eq!(dcinside.name, "디시인사이드");
        assert!(catalog.find_by_id("no-such-community").is_none());
    }

    #[test]
    fn test_resolve_drops_unknown_ids() {
        let catalog = CommunityCatalog::with_defaults();
        let resolved = catalog.resolve(&[
            "clien".to_string(),
            "not-a-community".to_string(),
            "dcinside".to_string(),
        ]);

        let ids: Vec<&str> = resolved.iter().map(|c| c.id.as_str()).collect();
        // Catalog order, not selection order
        assert_eq!(ids, vec!["dcinside", "clien"]);
    }

    #[test]
    fn test_resolve_unknown_only_is_empty() {
        let catalog = CommunityCatalog::with_defaults();
        assert!(catalog.resolve(&["ghost".to_string()]).is_empty());
    }

    #[test]
    fn test_grouped_covers_all_entries() {
        let catalog = CommunityCatalog::with_defaults();
        let grouped_count: usize = catalog.grouped().iter().map(|(_, v)| v.len()).sum();
        assert_eq!(grouped_count, catalog.all().len());
    }

    #[test]
    fn test_by_category() {
        let catalog = CommunityCatalog::with_defaults();
        let social = catalog.by_category(CommunityCategory::Social);
        assert!(social.iter().all(|c| c.category == CommunityCategory::Social));
        assert!(social.iter().any(|c| c.id == "instagram"));
    }
}
