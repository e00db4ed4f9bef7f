//! Game state machine
//!
//! Session orchestration, hint economy, and target selection.

mod error;
pub mod hints;
pub mod picker;
mod session;

pub use error::GameError;
pub use hints::{HintGrant, HintLevel, HintState, TagReveal, REDACTION_MARK};
pub use picker::{DailyPicker, PickerType, RandomPicker, TargetPicker};
pub use session::{GameSession, Status};
