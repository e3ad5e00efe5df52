//! Terminal rendering layer.
//!
//! Rendering is split in two: [`GameView`] maps game state into a pure
//! in-memory [`FrameBuffer`] (unit-testable, no I/O), and
//! [`TerminalRenderer`] flushes framebuffers to the real terminal with
//! diff-based redraws.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use termtris_core as core;
pub use termtris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{shape_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
