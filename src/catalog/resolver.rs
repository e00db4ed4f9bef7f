//! Player input resolution
//!
//! Maps free text to a single pool entity by exact case-insensitive match
//! on either title, and offers prefix suggestions for the input box. No
//! fuzzy matching.

use crate::core::Entity;

/// Maximum number of prefix suggestions returned to the input box
pub const SUGGESTION_LIMIT: usize = 10;

/// Resolve player input to a pool entity
///
/// Matches by case-insensitive equality against either display title;
/// returns `None` if nothing matches.
#[must_use]
pub fn resolve<'a>(pool: &'a [Entity], input: &str) -> Option<&'a Entity> {
    pool.iter().find(|e| e.matches_name(input))
}

/// Pool entities whose title starts with the typed prefix
///
/// Case-insensitive on either title; entities in `exclude` (already
/// guessed) are skipped; at most `limit` results in pool order.
#[must_use]
pub fn suggest<'a>(
    pool: &'a [Entity],
    prefix: &str,
    exclude: &[u32],
    limit: usize,
) -> Vec<&'a Entity> {
    let prefix = prefix.trim().to_lowercase();
    if prefix.is_empty() {
        return Vec::new();
    }

    pool.iter()
        .filter(|e| !exclude.contains(&e.id()))
        .filter(|e| {
            e.title().to_lowercase().starts_with(&prefix)
                || e.title_romaji().to_lowercase().starts_with(&prefix)
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityData;

    fn pool() -> Vec<Entity> {
        let make = |id: u32, title: &str, romaji: &str| {
            Entity::new(EntityData {
                id,
                title: title.to_string(),
                title_romaji: romaji.to_string(),
                ..EntityData::default()
            })
        };
        vec![
            make(1, "進擊的巨人", "Shingeki no Kyojin"),
            make(2, "葬送的芙莉蓮", "Sousou no Frieren"),
            make(3, "鬼滅之刃", "Kimetsu no Yaiba"),
        ]
    }

    #[test]
    fn resolve_exact_local_title() {
        let pool = pool();
        let found = resolve(&pool, "葬送的芙莉蓮").unwrap();
        assert_eq!(found.id(), 2);
    }

    #[test]
    fn resolve_romaji_case_insensitive() {
        let pool = pool();
        let found = resolve(&pool, "shingeki no kyojin").unwrap();
        assert_eq!(found.id(), 1);
        assert_eq!(resolve(&pool, "KIMETSU NO YAIBA").unwrap().id(), 3);
    }

    #[test]
    fn resolve_unknown_is_none() {
        let pool = pool();
        assert!(resolve(&pool, "不存在的動漫").is_none());
        assert!(resolve(&pool, "").is_none());
    }

    #[test]
    fn resolve_is_exact_not_prefix() {
        let pool = pool();
        assert!(resolve(&pool, "進擊").is_none());
    }

    #[test]
    fn suggest_matches_prefix_of_either_title() {
        let pool = pool();

        let by_local = suggest(&pool, "葬送", &[], SUGGESTION_LIMIT);
        assert_eq!(by_local.len(), 1);
        assert_eq!(by_local[0].id(), 2);

        let by_romaji = suggest(&pool, "sou", &[], SUGGESTION_LIMIT);
        assert_eq!(by_romaji.len(), 1);
        assert_eq!(by_romaji[0].id(), 2);
    }

    #[test]
    fn suggest_excludes_guessed_entities() {
        let pool = pool();
        let results = suggest(&pool, "s", &[1], SUGGESTION_LIMIT);
        assert!(results.iter().all(|e| e.id() != 1));
    }

    #[test]
    fn suggest_respects_limit() {
        let pool = pool();
        let results = suggest(&pool, "", &[], 2);
        assert!(results.is_empty()); // blank prefix suggests nothing

        let results = suggest(&pool, "鬼", &[], 0);
        assert!(results.is_empty());
    }
}
