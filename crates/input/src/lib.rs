//! Terminal input module.
//!
//! Maps `crossterm` key events into [`types::GameAction`]s. Kept independent
//! of any UI layer so the mapping can be unit-tested without a terminal.

pub mod map;

pub use termtris_types as types;

pub use map::{handle_key_event, should_quit};
