//! Catalog entity representation
//!
//! An Entity is one anime from the candidate pool. Construction normalizes
//! the tag list so every downstream consumer can rely on its shape.

use std::fmt;

/// Maximum number of tags an entity keeps after deduplication
pub const MAX_TAGS: usize = 3;

/// Sentinel tag for entities with no recognized tags ("uncategorized")
///
/// Participates in overlap comparison like any other tag.
pub const UNCATEGORIZED_TAG: &str = "其他";

/// Raw field values for an entity, before normalization
///
/// The catalog loader fills this from deserialized records; `Entity::new`
/// consumes it and enforces the tag invariants.
#[derive(Debug, Clone, Default)]
pub struct EntityData {
    pub id: u32,
    pub title: String,
    pub title_romaji: String,
    pub image_url: String,
    pub studio: String,
    pub demographic: String,
    pub source: String,
    pub year: i32,
    pub episodes: i32,
    pub tags: Vec<String>,
    pub synopsis: String,
}

/// One anime from the candidate pool
///
/// Fields are private; the tag list is guaranteed non-empty, duplicate-free,
/// and at most [`MAX_TAGS`] long. `id` is the sole authority for identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: u32,
    title: String,
    title_romaji: String,
    image_url: String,
    studio: String,
    demographic: String,
    source: String,
    year: i32,
    episodes: i32,
    tags: Vec<String>,
    synopsis: String,
}

impl Entity {
    /// Create a new Entity from raw field values
    ///
    /// Tags are deduplicated in first-seen order, blank entries dropped, and
    /// the list capped at [`MAX_TAGS`]. An empty result is replaced by the
    /// single [`UNCATEGORIZED_TAG`] sentinel.
    #[must_use]
    pub fn new(data: EntityData) -> Self {
        let tags = normalize_tags(data.tags);

        Self {
            id: data.id,
            title: data.title,
            title_romaji: data.title_romaji,
            image_url: data.image_url,
            studio: data.studio,
            demographic: data.demographic,
            source: data.source,
            year: data.year,
            episodes: data.episodes,
            tags,
            synopsis: data.synopsis,
        }
    }

    /// Stable unique identifier
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Localized display title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Original (romanized) title
    #[inline]
    #[must_use]
    pub fn title_romaji(&self) -> &str {
        &self.title_romaji
    }

    /// Cover image reference; opaque to the game logic
    #[inline]
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[inline]
    #[must_use]
    pub fn studio(&self) -> &str {
        &self.studio
    }

    #[inline]
    #[must_use]
    pub fn demographic(&self) -> &str {
        &self.demographic
    }

    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn episodes(&self) -> i32 {
        self.episodes
    }

    /// Tag list: non-empty, duplicate-free, at most [`MAX_TAGS`] entries
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Free-text synopsis, revealed only through the synopsis hint
    #[inline]
    #[must_use]
    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    /// Check if the tag list is just the uncategorized sentinel
    #[must_use]
    pub fn is_uncategorized(&self) -> bool {
        self.tags.len() == 1 && self.tags[0] == UNCATEGORIZED_TAG
    }

    /// Check if a tag value appears anywhere in this entity's tag list
    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive match of player input against either title
    #[must_use]
    pub fn matches_name(&self, input: &str) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return false;
        }
        eq_ignore_case(&self.title, input) || eq_ignore_case(&self.title_romaji, input)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

fn normalize_tags(raw: Vec<String>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);

    for tag in raw {
        let tag = tag.trim();
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
        if tags.len() == MAX_TAGS {
            break;
        }
    }

    if tags.is_empty() {
        tags.push(UNCATEGORIZED_TAG.to_string());
    }

    tags
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    // Unicode lowercasing; identity for CJK titles
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with_tags(tags: &[&str]) -> EntityData {
        EntityData {
            id: 1,
            title: "葬送的芙莉蓮".to_string(),
            title_romaji: "Sousou no Frieren".to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            ..EntityData::default()
        }
    }

    #[test]
    fn tags_deduplicated_in_first_seen_order() {
        let entity = Entity::new(data_with_tags(&["冒險", "奇幻", "冒險"]));
        assert_eq!(entity.tags(), &["冒險", "奇幻"]);
    }

    #[test]
    fn tags_capped_at_three() {
        let entity = Entity::new(data_with_tags(&["冒險", "奇幻", "劇情", "喜劇", "日常"]));
        assert_eq!(entity.tags().len(), MAX_TAGS);
        assert_eq!(entity.tags(), &["冒險", "奇幻", "劇情"]);
    }

    #[test]
    fn empty_tags_replaced_by_sentinel() {
        let entity = Entity::new(data_with_tags(&[]));
        assert_eq!(entity.tags(), &[UNCATEGORIZED_TAG]);
        assert!(entity.is_uncategorized());
    }

    #[test]
    fn blank_tags_dropped_before_sentinel_check() {
        let entity = Entity::new(data_with_tags(&["", "  "]));
        assert_eq!(entity.tags(), &[UNCATEGORIZED_TAG]);
    }

    #[test]
    fn sentinel_not_flagged_for_tagged_entity() {
        let entity = Entity::new(data_with_tags(&["冒險"]));
        assert!(!entity.is_uncategorized());
    }

    #[test]
    fn has_tag_checks_membership() {
        let entity = Entity::new(data_with_tags(&["冒險", "奇幻"]));
        assert!(entity.has_tag("奇幻"));
        assert!(!entity.has_tag("恐怖"));
    }

    #[test]
    fn matches_name_either_title_case_insensitive() {
        let entity = Entity::new(data_with_tags(&["冒險"]));
        assert!(entity.matches_name("葬送的芙莉蓮"));
        assert!(entity.matches_name("sousou no frieren"));
        assert!(entity.matches_name("SOUSOU NO FRIEREN"));
        assert!(!entity.matches_name("進擊的巨人"));
    }

    #[test]
    fn matches_name_rejects_empty_input() {
        let entity = Entity::new(data_with_tags(&["冒險"]));
        assert!(!entity.matches_name(""));
        assert!(!entity.matches_name("   "));
    }

    #[test]
    fn display_uses_local_title() {
        let entity = Entity::new(data_with_tags(&["冒險"]));
        assert_eq!(format!("{entity}"), "葬送的芙莉蓮");
    }
}
