//! Hint purchases and penalty accounting
//!
//! Three independent hint levels trade penalty cost for partial information
//! about the target:
//! - tag reveal: repeatable, one random tag position per purchase
//! - image reveal: one-shot, exposes the cover image reference
//! - synopsis reveal: one-shot, exposes the synopsis with the target's own
//!   titles redacted
//!
//! A tag position the player can already infer from guess history is
//! "known free" and is never charged for. The free set is a pure derived
//! view of (target, history), recomputed on demand and never stored.

use super::GameError;
use crate::core::Entity;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Marker substituted for the target's titles in a revealed synopsis
pub const REDACTION_MARK: &str = "███";

/// The three purchasable hint levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintLevel {
    /// Reveal one random undisclosed tag position
    Tag,
    /// Reveal the cover image reference (rendered degraded by the caller)
    Image,
    /// Reveal the synopsis with the target's titles redacted
    Synopsis,
}

impl HintLevel {
    /// Penalty cost added to the effective attempt count on purchase
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Self::Tag => 2,
            Self::Image => 5,
            Self::Synopsis => 10,
        }
    }
}

/// Information handed to the caller by a successful purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintGrant {
    Tag { index: usize, tag: String },
    Image { url: String },
    Synopsis { text: String },
}

/// One revealed tag position, for rendering
///
/// `paid` distinguishes purchased positions from those inferable for free
/// from guess history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReveal {
    pub index: usize,
    pub tag: String,
    pub paid: bool,
}

/// Per-session hint purchases and accumulated penalty
#[derive(Debug, Clone, Default)]
pub struct HintState {
    bought_tags: FxHashSet<usize>,
    image_bought: bool,
    synopsis_bought: bool,
    penalty: u32,
}

impl HintState {
    /// Accumulated penalty cost, added to the guess count for scoring
    #[inline]
    #[must_use]
    pub const fn penalty(&self) -> u32 {
        self.penalty
    }

    /// Tag positions purchased so far
    #[inline]
    #[must_use]
    pub const fn bought_tags(&self) -> &FxHashSet<usize> {
        &self.bought_tags
    }

    #[inline]
    #[must_use]
    pub const fn image_bought(&self) -> bool {
        self.image_bought
    }

    #[inline]
    #[must_use]
    pub const fn synopsis_bought(&self) -> bool {
        self.synopsis_bought
    }

    /// Tag positions still purchasable: neither known free nor bought
    ///
    /// Uncategorized targets (sentinel-only tag list) have nothing worth
    /// selling, so their eligible set is always empty.
    #[must_use]
    pub fn eligible_tag_indices(&self, target: &Entity, history: &[&Entity]) -> Vec<usize> {
        if target.is_uncategorized() {
            return Vec::new();
        }

        let free = free_tag_indices(target, history);
        (0..target.tags().len())
            .filter(|i| !free.contains(i) && !self.bought_tags.contains(i))
            .collect()
    }

    /// Check whether a purchase at this level would succeed
    ///
    /// Callers should disable the purchase in their UI when this is false;
    /// `purchase` defends against the call regardless.
    #[must_use]
    pub fn available(&self, level: HintLevel, target: &Entity, history: &[&Entity]) -> bool {
        match level {
            HintLevel::Tag => !self.eligible_tag_indices(target, history).is_empty(),
            HintLevel::Image => !self.image_bought,
            HintLevel::Synopsis => !self.synopsis_bought,
        }
    }

    /// All revealed tag positions (free and paid), ordered by index
    #[must_use]
    pub fn revealed_tags(&self, target: &Entity, history: &[&Entity]) -> Vec<TagReveal> {
        let free = free_tag_indices(target, history);

        target
            .tags()
            .iter()
            .enumerate()
            .filter(|(i, _)| self.bought_tags.contains(i) || free.contains(i))
            .map(|(index, tag)| TagReveal {
                index,
                tag: tag.clone(),
                paid: self.bought_tags.contains(&index),
            })
            .collect()
    }

    /// Purchase a hint, charging its cost on success
    ///
    /// # Errors
    /// Returns `HintUnavailable` (with no charge and no state change) when
    /// no eligible tag position remains, or when a one-shot level is
    /// already unlocked.
    pub(crate) fn purchase(
        &mut self,
        level: HintLevel,
        target: &Entity,
        history: &[&Entity],
    ) -> Result<HintGrant, GameError> {
        match level {
            HintLevel::Tag => self.buy_tag(target, history),
            HintLevel::Image => self.buy_image(target),
            HintLevel::Synopsis => self.buy_synopsis(target),
        }
    }

    fn buy_tag(&mut self, target: &Entity, history: &[&Entity]) -> Result<HintGrant, GameError> {
        let eligible = self.eligible_tag_indices(target, history);
        let Some(&index) = eligible.choose(&mut rand::rng()) else {
            return Err(GameError::HintUnavailable);
        };

        self.bought_tags.insert(index);
        self.penalty += HintLevel::Tag.cost();

        Ok(HintGrant::Tag {
            index,
            tag: target.tags()[index].clone(),
        })
    }

    fn buy_image(&mut self, target: &Entity) -> Result<HintGrant, GameError> {
        if self.image_bought {
            return Err(GameError::HintUnavailable);
        }

        self.image_bought = true;
        self.penalty += HintLevel::Image.cost();

        Ok(HintGrant::Image {
            url: target.image_url().to_string(),
        })
    }

    fn buy_synopsis(&mut self, target: &Entity) -> Result<HintGrant, GameError> {
        if self.synopsis_bought {
            return Err(GameError::HintUnavailable);
        }

        self.synopsis_bought = true;
        self.penalty += HintLevel::Synopsis.cost();

        Ok(HintGrant::Synopsis {
            text: redact_names(
                target.synopsis(),
                &[target.title(), target.title_romaji()],
            ),
        })
    }
}

/// Tag positions of the target already inferable from guess history
///
/// Position `i` is known free iff any guessed entity carries the tag value
/// `target.tags()[i]` anywhere in its own list: the player has already seen
/// that value marked as matched in a prior guess row.
#[must_use]
pub fn free_tag_indices(target: &Entity, history: &[&Entity]) -> FxHashSet<usize> {
    target
        .tags()
        .iter()
        .enumerate()
        .filter(|(_, tag)| history.iter().any(|guessed| guessed.has_tag(tag)))
        .map(|(i, _)| i)
        .collect()
}

/// Replace every occurrence of the given names in `text` with the
/// redaction marker
///
/// Matching is ASCII-case-insensitive (romanized titles), exact for
/// everything else. Longer names are tried first so a name containing
/// another is redacted whole.
#[must_use]
pub fn redact_names(text: &str, names: &[&str]) -> String {
    let mut needles: Vec<&str> = names
        .iter()
        .copied()
        .filter(|n| !n.trim().is_empty())
        .collect();
    needles.sort_by_key(|n| std::cmp::Reverse(n.len()));

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(ch) = rest.chars().next() {
        for needle in &needles {
            if let Some(len) = match_len_ignore_ascii_case(rest, needle) {
                out.push_str(REDACTION_MARK);
                rest = &rest[len..];
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Byte length of `needle` matched at the start of `haystack`, ignoring
/// ASCII case
fn match_len_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.chars();
    let mut len = 0;

    for nc in needle.chars() {
        let hc = hay.next()?;
        if !hc.eq_ignore_ascii_case(&nc) {
            return None;
        }
        len += hc.len_utf8();
    }

    Some(len)
}
