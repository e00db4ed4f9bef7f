//! Guess scoring against the hidden target
//!
//! A Verdict records the per-field feedback for one guess:
//! - categorical fields (studio, demographic, source) compare by equality
//! - numeric fields (year, episodes) additionally carry a direction on
//!   mismatch, pointing toward the target's value
//! - tags compare by set membership, never by position
//!
//! The target's own tag list is never exposed; only the guess's tags are
//! marked matched or unmatched.

use super::Entity;

/// Outcome of comparing a single categorical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Values are equal
    Exact,
    /// Values differ
    Wrong,
}

impl FieldStatus {
    fn of<T: PartialEq>(guess: T, target: T) -> Self {
        if guess == target { Self::Exact } else { Self::Wrong }
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }
}

/// Where the target's value lies relative to the guessed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Target value is higher than the guess
    Higher,
    /// Target value is lower than the guess
    Lower,
}

/// Outcome of comparing a numeric field
///
/// The direction is informational guidance for bracketing the true value;
/// it is present exactly when the status is [`FieldStatus::Wrong`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericVerdict {
    pub status: FieldStatus,
    pub direction: Option<Direction>,
}

impl NumericVerdict {
    fn of(guess: i32, target: i32) -> Self {
        if guess == target {
            Self {
                status: FieldStatus::Exact,
                direction: None,
            }
        } else {
            let direction = if guess < target {
                Direction::Higher
            } else {
                Direction::Lower
            };
            Self {
                status: FieldStatus::Wrong,
                direction: Some(direction),
            }
        }
    }
}

/// One tag of the guess, marked by membership in the target's tag list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub tag: String,
    pub matched: bool,
}

/// Full field-by-field feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// True exactly when the guess is the target (`id` equality)
    pub hit: bool,
    pub studio: FieldStatus,
    pub demographic: FieldStatus,
    pub source: FieldStatus,
    pub year: NumericVerdict,
    pub episodes: NumericVerdict,
    /// One entry per tag of the guess, in the guess's own order
    pub tags: Vec<TagMatch>,
}

impl Verdict {
    /// Score a guess against the target
    ///
    /// Pure and side-effect-free; neither entity is mutated and the result
    /// depends only on the two entities' field values.
    ///
    /// # Examples
    /// ```
    /// use anidle::catalog;
    /// use anidle::core::Verdict;
    ///
    /// let pool = catalog::embedded();
    /// let verdict = Verdict::score(&pool[0], &pool[0]);
    /// assert!(verdict.hit);
    /// ```
    #[must_use]
    pub fn score(guess: &Entity, target: &Entity) -> Self {
        let tags = guess
            .tags()
            .iter()
            .map(|tag| TagMatch {
                tag: tag.clone(),
                matched: target.has_tag(tag),
            })
            .collect();

        Self {
            hit: guess.id() == target.id(),
            studio: FieldStatus::of(guess.studio(), target.studio()),
            demographic: FieldStatus::of(guess.demographic(), target.demographic()),
            source: FieldStatus::of(guess.source(), target.source()),
            year: NumericVerdict::of(guess.year(), target.year()),
            episodes: NumericVerdict::of(guess.episodes(), target.episodes()),
            tags,
        }
    }

    /// Count of the guess's tags present in the target's tag list
    #[must_use]
    pub fn matched_tags(&self) -> usize {
        self.tags.iter().filter(|t| t.matched).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityData;

    fn entity(id: u32, year: i32, episodes: i32, tags: &[&str]) -> Entity {
        Entity::new(EntityData {
            id,
            title: format!("作品{id}"),
            title_romaji: format!("series-{id}"),
            studio: "MAPPA".to_string(),
            demographic: "少年".to_string(),
            source: "漫畫".to_string(),
            year,
            episodes,
            tags: tags.iter().map(ToString::to_string).collect(),
            ..EntityData::default()
        })
    }

    #[test]
    fn self_comparison_is_all_exact() {
        let e = entity(1, 2013, 25, &["動作", "劇情"]);
        let verdict = Verdict::score(&e, &e);

        assert!(verdict.hit);
        assert_eq!(verdict.studio, FieldStatus::Exact);
        assert_eq!(verdict.demographic, FieldStatus::Exact);
        assert_eq!(verdict.source, FieldStatus::Exact);
        assert_eq!(verdict.year.status, FieldStatus::Exact);
        assert_eq!(verdict.year.direction, None);
        assert_eq!(verdict.episodes.status, FieldStatus::Exact);
        assert!(verdict.tags.iter().all(|t| t.matched));
    }

    #[test]
    fn hit_is_id_equality_only() {
        // Identical field values but distinct ids: not a hit
        let a = entity(1, 2013, 25, &["動作"]);
        let b = entity(2, 2013, 25, &["動作"]);
        let verdict = Verdict::score(&a, &b);

        assert!(!verdict.hit);
        assert_eq!(verdict.year.status, FieldStatus::Exact);
    }

    #[test]
    fn numeric_direction_points_up_when_target_higher() {
        let guess = entity(1, 2010, 12, &["動作"]);
        let target = entity(2, 2020, 24, &["動作"]);
        let verdict = Verdict::score(&guess, &target);

        assert_eq!(verdict.year.status, FieldStatus::Wrong);
        assert_eq!(verdict.year.direction, Some(Direction::Higher));
        assert_eq!(verdict.episodes.direction, Some(Direction::Higher));
    }

    #[test]
    fn numeric_direction_points_down_when_target_lower() {
        let guess = entity(1, 2020, 50, &["動作"]);
        let target = entity(2, 2010, 12, &["動作"]);
        let verdict = Verdict::score(&guess, &target);

        assert_eq!(verdict.year.direction, Some(Direction::Lower));
        assert_eq!(verdict.episodes.direction, Some(Direction::Lower));
    }

    #[test]
    fn numeric_equality_carries_no_direction() {
        let guess = entity(1, 2015, 12, &["動作"]);
        let target = entity(2, 2015, 13, &["動作"]);
        let verdict = Verdict::score(&guess, &target);

        assert_eq!(verdict.year.status, FieldStatus::Exact);
        assert_eq!(verdict.year.direction, None);
    }

    #[test]
    fn tag_matching_is_membership_not_position() {
        let mut guess_data = EntityData {
            id: 1,
            tags: vec!["奇幻".to_string(), "冒險".to_string()],
            ..EntityData::default()
        };
        let guess = Entity::new(guess_data.clone());
        guess_data.id = 2;
        guess_data.tags = vec!["冒險".to_string(), "科幻".to_string()];
        let target = Entity::new(guess_data);

        let verdict = Verdict::score(&guess, &target);

        // 冒險 matches despite occupying different positions; 奇幻 does not
        assert_eq!(verdict.tags.len(), 2);
        assert_eq!(verdict.tags[0].tag, "奇幻");
        assert!(!verdict.tags[0].matched);
        assert_eq!(verdict.tags[1].tag, "冒險");
        assert!(verdict.tags[1].matched);
        assert_eq!(verdict.matched_tags(), 1);
    }

    #[test]
    fn tags_reported_in_guess_order() {
        let guess = entity(1, 2010, 12, &["劇情", "動作", "喜劇"]);
        let target = entity(2, 2010, 12, &["動作"]);
        let verdict = Verdict::score(&guess, &target);

        let names: Vec<&str> = verdict.tags.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(names, &["劇情", "動作", "喜劇"]);
    }

    #[test]
    fn sentinel_tag_participates_in_overlap() {
        let guess = entity(1, 2010, 12, &[]);
        let target = entity(2, 2010, 12, &[]);
        let verdict = Verdict::score(&guess, &target);

        // Both fall back to the sentinel, which overlaps like any tag
        assert_eq!(verdict.tags.len(), 1);
        assert!(verdict.tags[0].matched);
    }

    #[test]
    fn categorical_mismatch_is_wrong() {
        let guess = entity(1, 2010, 12, &["動作"]);
        let mut data = EntityData {
            id: 2,
            studio: "Bones".to_string(),
            demographic: "青年".to_string(),
            source: "原創".to_string(),
            year: 2010,
            episodes: 12,
            tags: vec!["動作".to_string()],
            ..EntityData::default()
        };
        data.title = "別部作品".to_string();
        let target = Entity::new(data);

        let verdict = Verdict::score(&guess, &target);
        assert_eq!(verdict.studio, FieldStatus::Wrong);
        assert_eq!(verdict.demographic, FieldStatus::Wrong);
        assert_eq!(verdict.source, FieldStatus::Wrong);
    }
}
