//! Shared constants and pure data types.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the engine, the renderer, and the input layer alike.
//!
//! # Board dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (5, 0); the centering bias of the shape masks places
//!   every freshly spawned cell above the visible grid
//!
//! # Timing and progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Fixed frame step (~60 FPS) |
//! | `BASE_DROP_INTERVAL_MS` | 500 | Gravity interval at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 50 | Interval reduction per level gained |
//! | `MIN_DROP_INTERVAL_MS` | 100 | Gravity floor |
//! | `LINES_PER_LEVEL` | 10 | Cumulative lines per level-up |
//! | `POINTS_PER_LINE` | 10 | Flat score per cleared line |

/// Grid width in cells (10 columns).
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows).
pub const GRID_HEIGHT: u8 = 20;

/// Fixed frame step in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (milliseconds per row).
pub const BASE_DROP_INTERVAL_MS: u32 = 500;

/// Gravity interval reduction per level gained.
pub const DROP_INTERVAL_STEP_MS: u32 = 50;

/// Fastest gravity interval; the interval never drops below this.
pub const MIN_DROP_INTERVAL_MS: u32 = 100;

/// Cumulative cleared lines required per level-up.
pub const LINES_PER_LEVEL: u32 = 10;

/// Flat score awarded per cleared line.
pub const POINTS_PER_LINE: u32 = 10;

/// Starting level.
pub const START_LEVEL: u32 = 1;

/// Spawn anchor for new pieces (x, y).
pub const SPAWN_ANCHOR: (i8, i8) = (5, 0);

/// The seven shape kinds, in the catalog's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl ShapeKind {
    /// All kinds in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::T,
    ];

    /// One-letter display name.
    pub fn letter(&self) -> &'static str {
        match self {
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::T => "T",
        }
    }
}

/// Cell on the grid (`None` = empty, `Some` = locked cell's color marker).
pub type Cell = Option<ShapeKind>;

/// Logical game actions, regardless of the input device that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
}
