//! Anidle
//!
//! A daily anime guessing game: each guess against the hidden target is
//! scored field by field, with directional feedback on numeric fields and
//! set-overlap feedback on tags. A hint economy trades penalty cost for
//! partial information.
//!
//! # Quick Start
//!
//! ```rust
//! use anidle::catalog;
//! use anidle::game::{DailyPicker, GameSession, PickerType};
//!
//! let pool = catalog::embedded();
//! let picker = PickerType::Daily(DailyPicker::for_date(2026, 8, 7));
//!
//! let mut session = GameSession::new(&pool, picker, Some(8)).unwrap();
//! let verdict = session.submit(&pool[0]).unwrap();
//! println!("hit: {}", verdict.hit);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Candidate pool
pub mod catalog;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
