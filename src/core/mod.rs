//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no game state.
//! All types here are pure, testable, and independent of any front-end.

mod entity;
mod verdict;

pub use entity::{Entity, EntityData, MAX_TAGS, UNCATEGORIZED_TAG};
pub use verdict::{Direction, FieldStatus, NumericVerdict, TagMatch, Verdict};
