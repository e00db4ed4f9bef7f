//! Candidate pool loading and lookup
//!
//! Provides the embedded default catalog compiled into the binary, JSON
//! file loading, and player-input resolution against a loaded pool.

pub mod loader;
pub mod resolver;

pub use loader::{entities_from_json, load_from_file, CatalogEntry};
pub use resolver::{resolve, suggest, SUGGESTION_LIMIT};

use crate::core::Entity;

/// Default catalog shipped with the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// The embedded default candidate pool
///
/// # Panics
/// Panics only if the compiled-in catalog is malformed, which is a build
/// defect, not a runtime condition.
#[must_use]
pub fn embedded() -> Vec<Entity> {
    entities_from_json(EMBEDDED_CATALOG).expect("embedded catalog is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_TAGS;

    #[test]
    fn embedded_catalog_parses() {
        let pool = embedded();
        assert!(pool.len() >= 20);
    }

    #[test]
    fn embedded_ids_are_unique() {
        let pool = embedded();
        for (i, a) in pool.iter().enumerate() {
            assert!(
                pool[i + 1..].iter().all(|b| b.id() != a.id()),
                "duplicate id {}",
                a.id()
            );
        }
    }

    #[test]
    fn embedded_entities_are_well_formed() {
        for e in embedded() {
            assert!(!e.title().is_empty());
            assert!(!e.tags().is_empty());
            assert!(e.tags().len() <= MAX_TAGS);
            assert!(e.year() > 1900, "suspicious year for {}", e.title());
        }
    }

    #[test]
    fn embedded_entities_resolve_by_romaji() {
        let pool = embedded();
        for e in &pool {
            assert_eq!(resolve(&pool, e.title_romaji()).map(Entity::id), Some(e.id()));
        }
    }
}
