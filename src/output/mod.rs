//! Terminal output formatting
//!
//! Display utilities for the plain CLI mode.

pub mod display;
pub mod formatters;

pub use display::{
    print_hint_grant, print_hint_menu, print_loss_banner, print_status_line, print_verdict_row,
    print_win_banner,
};
