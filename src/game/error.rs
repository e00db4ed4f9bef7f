//! Game error taxonomy
//!
//! Every variant is a recoverable rejection of one operation; none of them
//! abort the process. Only `EmptyPool` prevents a session from existing.

use std::fmt;

/// Error type for rejected session operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The entity was already submitted this session
    DuplicateGuess,
    /// A mutating operation was called after the session ended
    AlreadyOver,
    /// No eligible hint remains at the requested level
    HintUnavailable,
    /// Session construction was requested against zero candidates
    EmptyPool,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateGuess => write!(f, "entity was already guessed this session"),
            Self::AlreadyOver => write!(f, "the session has already ended"),
            Self::HintUnavailable => write!(f, "no hint is available at this level"),
            Self::EmptyPool => write!(f, "cannot start a session with an empty candidate pool"),
        }
    }
}

impl std::error::Error for GameError {}
