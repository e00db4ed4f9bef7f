//! Catalog loading utilities
//!
//! Deserializes catalog JSON into validated entities. Field fallbacks are
//! applied once here so the game logic never sees missing values.

use crate::core::{Entity, EntityData};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One record of the catalog file, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub title_romaji: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub studio: String,
    #[serde(default)]
    pub demographic: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub episodes: i32,
    #[serde(default)]
    pub synopsis: String,
}

impl CatalogEntry {
    /// Validate and convert into an [`Entity`]
    ///
    /// The localized title falls back to the romanized one; entries with
    /// neither cannot be looked up and are dropped. Blank studio and
    /// demographic fields get the catalog's placeholder values.
    #[must_use]
    pub fn into_entity(self) -> Option<Entity> {
        let title = if self.title.trim().is_empty() {
            self.title_romaji.clone()
        } else {
            self.title
        };
        if title.trim().is_empty() {
            return None;
        }

        let studio = non_blank_or(self.studio, "Unknown");
        let demographic = non_blank_or(self.demographic, "未知");

        Some(Entity::new(EntityData {
            id: self.id,
            title,
            title_romaji: self.title_romaji,
            image_url: self.image_url,
            studio,
            demographic,
            source: self.source,
            year: self.year,
            episodes: self.episodes,
            tags: self.genres,
            synopsis: self.synopsis,
        }))
    }
}

fn non_blank_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Parse a catalog from a JSON string, skipping unusable entries
///
/// # Errors
///
/// Returns an error if the JSON is malformed. Individual entries without a
/// usable title are silently dropped, not errors.
pub fn entities_from_json(json: &str) -> Result<Vec<Entity>> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(json).context("malformed catalog JSON")?;

    Ok(entries
        .into_iter()
        .filter_map(CatalogEntry::into_entity)
        .collect())
}

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its JSON is malformed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Entity>> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("reading catalog file {}", path.as_ref().display()))?;
    entities_from_json(&content)
}
