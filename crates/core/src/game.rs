//! Game session state and the drop loop.
//!
//! A [`Game`] owns the grid, the active piece, the look-ahead piece, scoring
//! counters, and the gravity timer. Timing is driven externally: call
//! [`Game::tick`] with elapsed milliseconds from whatever scheduler hosts the
//! game (frame loop, fixed-step test harness, benchmark).

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceStream;
use termtris_types::{
    GameAction, ShapeKind, BASE_DROP_INTERVAL_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL,
    MIN_DROP_INTERVAL_MS, POINTS_PER_LINE, START_LEVEL,
};

/// Gravity interval for a level: 500ms at level 1, 50ms faster per level
/// gained, floored at 100ms.
pub fn drop_interval_for(level: u32) -> u32 {
    BASE_DROP_INTERVAL_MS
        .saturating_sub(level.saturating_sub(1) * DROP_INTERVAL_STEP_MS)
        .max(MIN_DROP_INTERVAL_MS)
}

/// One game session. Never halts: topping out resets the session in place
/// and play continues with the already-promoted look-ahead piece.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    current: Piece,
    next: ShapeKind,
    pieces: PieceStream,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
}

impl Game {
    /// Create a game with a seeded piece stream and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        let mut pieces = PieceStream::new(seed);
        let current = Piece::spawn(pieces.draw());
        let next = pieces.draw();

        Self {
            grid: Grid::new(),
            current,
            next,
            pieces,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: BASE_DROP_INTERVAL_MS,
            drop_timer_ms: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next_kind(&self) -> ShapeKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Advance the drop timer. Once the accumulated time exceeds the current
    /// drop interval, the piece descends one row (locking if it cannot) and
    /// the accumulator resets. Returns true when the piece descended or
    /// locked this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms <= self.drop_interval_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_current();
        }
        true
    }

    /// Try-and-rollback translation: compute the candidate placement,
    /// validate it against the grid, and commit only if valid. All manual
    /// moves and gravity descend through here.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.current.moved(dx, dy);
        if candidate.is_valid(&self.grid) {
            self.current = candidate;
            return true;
        }
        false
    }

    /// Try-and-rollback rotation (next rotation state, wrapping).
    pub fn try_rotate(&mut self) -> bool {
        let candidate = self.current.rotated();
        if candidate.is_valid(&self.grid) {
            self.current = candidate;
            return true;
        }
        false
    }

    /// Drop to the lowest valid row and lock immediately, without waiting
    /// for the gravity timer.
    pub fn hard_drop(&mut self) {
        while self.try_move(0, 1) {}
        self.lock_current();
    }

    /// Apply a logical input action. Returns true when the action changed
    /// the piece (hard drop always counts).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Lock the active piece into the grid, clear full rows, update the
    /// score/level counters, and promote the look-ahead piece.
    fn lock_current(&mut self) {
        let cells = self.current.cells();
        self.grid.fill_cells(&cells, self.current.kind);

        let cleared = self.grid.clear_full_rows() as u32;
        if cleared > 0 {
            self.score += cleared * POINTS_PER_LINE;
            self.lines += cleared;
            if self.lines >= self.level * LINES_PER_LEVEL {
                self.level += 1;
                self.drop_interval_ms = drop_interval_for(self.level);
            }
        }

        // Locking with a cell still in the top row (or above the grid, where
        // it cannot be stored at all) means the stack has reached the
        // ceiling.
        let topped_out = cells.iter().any(|&(_, y)| y < 1);

        self.current = Piece::spawn(self.next);
        self.next = self.pieces.draw();

        if topped_out || !self.current.is_valid(&self.grid) {
            self.reset();
        }
    }

    /// Game over: restart in place. The grid and all counters return to
    /// their initial values; the freshly promoted look-ahead piece stays
    /// active so play continues seamlessly.
    fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.level = START_LEVEL;
        self.drop_interval_ms = BASE_DROP_INTERVAL_MS;
        self.drop_timer_ms = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
