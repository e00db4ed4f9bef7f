//! Command implementations

pub mod answer;
pub mod simple;

pub use answer::daily_answer;
pub use simple::run_simple;
