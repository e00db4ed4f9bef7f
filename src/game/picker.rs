//! Target selection strategies
//!
//! Defines the `TargetPicker` trait and the two concrete draw modes:
//! a date-seeded daily draw and an unseeded random draw.

use crate::core::Entity;
use chrono::Datelike;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// A strategy for drawing the session target from the candidate pool
pub trait TargetPicker {
    /// Draw one target from the pool
    ///
    /// Returns `None` exactly when the pool is empty.
    fn pick<'a>(&self, pool: &'a [Entity]) -> Option<&'a Entity>;
}

/// Enum wrapper for all picker types
///
/// Allows runtime selection of the draw mode while maintaining static
/// dispatch.
#[derive(Debug, Clone, Copy)]
pub enum PickerType {
    /// Deterministic draw seeded from the calendar date
    Daily(DailyPicker),
    /// Unseeded draw; may repeat across sessions
    Random(RandomPicker),
}

impl TargetPicker for PickerType {
    fn pick<'a>(&self, pool: &'a [Entity]) -> Option<&'a Entity> {
        match self {
            Self::Daily(p) => p.pick(pool),
            Self::Random(p) => p.pick(pool),
        }
    }
}

impl PickerType {
    /// Create a picker from a mode name
    ///
    /// Supported names: "daily", "random". Defaults to the daily draw for
    /// today's local date if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomPicker),
            _ => Self::Daily(DailyPicker::today()),
        }
    }
}

/// Deterministic daily draw
///
/// The seed is a pure function of the calendar date, so two sessions built
/// on the same date against the same pool ordering select the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPicker {
    seed: u64,
}

impl DailyPicker {
    /// Create a picker with an explicit seed
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Create a picker for a specific calendar date (1-indexed month/day)
    #[must_use]
    pub fn for_date(year: i32, month: u32, day: u32) -> Self {
        let seed = i64::from(year) * 1000 + i64::from(month) * 100 + i64::from(day);
        Self::from_seed(seed.unsigned_abs())
    }

    /// Create a picker for today's local date
    #[must_use]
    pub fn today() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::for_date(today.year(), today.month(), today.day())
    }

    /// The seed this picker draws with
    #[inline]
    #[must_use]
    pub const fn seed(self) -> u64 {
        self.seed
    }
}

impl TargetPicker for DailyPicker {
    fn pick<'a>(&self, pool: &'a [Entity]) -> Option<&'a Entity> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        pool.choose(&mut rng)
    }
}

/// Unseeded draw from system entropy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPicker;

impl TargetPicker for RandomPicker {
    fn pick<'a>(&self, pool: &'a [Entity]) -> Option<&'a Entity> {
        pool.choose(&mut rand::rng())
    }
}
