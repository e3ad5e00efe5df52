//! Termtris (workspace facade crate).
//!
//! This package keeps a stable `termtris::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use termtris_core as core;
pub use termtris_input as input;
pub use termtris_term as term;
pub use termtris_types as types;
