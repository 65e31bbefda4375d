pub mod setups;

use crate::models::{IntentFamily, SetupDefinition};

pub use setups::{NAKED_POC_MAGNETS, NARROW_IB_EXPANSION, SINGLE_PRINTS_FILL};

/// Bumped whenever a definition, id or declaration order changes.
pub const CATALOG_VERSION: &str = "2026.10.1";

/// Read-only view over the bundled setup definitions.
#[derive(Debug, Clone, Copy)]
pub struct SetupCatalog {
    pub version: &'static str,
    setups: &'static [SetupDefinition],
}

impl Default for SetupCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl SetupCatalog {
    pub fn bundled() -> Self {
        Self {
            version: CATALOG_VERSION,
            setups: &setups::SETUPS,
        }
    }

    pub fn len(&self) -> usize {
        self.setups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setups.is_empty()
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'static, SetupDefinition> {
        self.setups.iter()
    }

    pub fn get(&self, id: u16) -> Option<&'static SetupDefinition> {
        self.setups.iter().find(|s| s.id == id)
    }

    /// Case-insensitive lookup by display name, as stored in a day's `setup` field.
    pub fn find_by_name(&self, name: &str) -> Option<&'static SetupDefinition> {
        let name = name.trim();
        self.setups.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn by_family(
        &self,
        family: IntentFamily,
    ) -> impl Iterator<Item = &'static SetupDefinition> {
        self.setups.iter().filter(move |s| s.intent_family == family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_and_names_are_unique() {
        let cat = SetupCatalog::bundled();
        let ids: HashSet<u16> = cat.iter().map(|s| s.id).collect();
        let names: HashSet<String> = cat.iter().map(|s| s.name.to_lowercase()).collect();
        assert_eq!(ids.len(), cat.len());
        assert_eq!(names.len(), cat.len());
    }

    #[test]
    fn declaration_order_follows_ids() {
        let ids: Vec<u16> = SetupCatalog::bundled().iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn override_ids_resolve() {
        let cat = SetupCatalog::bundled();
        assert_eq!(cat.get(NARROW_IB_EXPANSION).unwrap().name, "Narrow IB Expansion");
        for id in NAKED_POC_MAGNETS {
            assert_eq!(cat.get(id).unwrap().intent_family, IntentFamily::Fill);
        }
        assert_eq!(cat.get(SINGLE_PRINTS_FILL).unwrap().name, "Single Prints Fill");
        assert!(cat.get(999).is_none());
    }

    #[test]
    fn every_family_is_represented() {
        let cat = SetupCatalog::bundled();
        for fam in IntentFamily::ALL {
            assert!(cat.by_family(fam).count() >= 5, "family {} underpopulated", fam);
        }
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        let cat = SetupCatalog::bundled();
        assert_eq!(cat.find_by_name("  vah fade ").map(|s| s.id), Some(12));
        assert!(cat.find_by_name("Nonexistent").is_none());
    }

    #[test]
    fn every_setup_documents_a_trap() {
        for s in SetupCatalog::bundled().iter() {
            assert!(!s.traps.is_empty(), "setup {} has no traps", s.id);
            assert!(!s.trigger.is_empty() && !s.target.is_empty() && !s.invalidation.is_empty());
        }
    }
}
