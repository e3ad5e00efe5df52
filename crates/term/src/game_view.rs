//! GameView: maps a [`core::Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes::{self, MASK_SIZE};
use crate::core::Game;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Display color of each shape kind.
pub fn shape_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::S => Rgb::new(0x00, 0xff, 0x00),
        ShapeKind::Z => Rgb::new(0xff, 0x00, 0x00),
        ShapeKind::I => Rgb::new(0x00, 0xff, 0xff),
        ShapeKind::O => Rgb::new(0xff, 0xff, 0x00),
        ShapeKind::J => Rgb::new(0xff, 0xa5, 0x00),
        ShapeKind::L => Rgb::new(0x00, 0x00, 0xff),
        ShapeKind::T => Rgb::new(0x80, 0x00, 0x80),
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_px_w = (GRID_WIDTH as u16) * self.cell_w;
        let grid_px_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        // Play area background, then border.
        fb.fill_rect(start_x + 1, start_y + 1, grid_px_w, grid_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked grid cells.
        for y in 0..GRID_HEIGHT as u16 {
            for x in 0..GRID_WIDTH as u16 {
                if let Some(Some(kind)) = game.grid().get(x as i8, y as i8) {
                    self.draw_grid_cell(fb, start_x, start_y, x, y, kind);
                }
            }
        }

        // Active piece; cells above the grid stay hidden behind the border.
        let current = game.current();
        for &(x, y) in current.cells().iter() {
            if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
                self.draw_grid_cell(fb, start_x, start_y, x as u16, y as u16, current.kind);
            }
        }

        // Side panel (score/level/lines/next).
        self.draw_side_panel(fb, game, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: ShapeKind,
    ) {
        let style = CellStyle {
            fg: shape_color(kind),
            bg: Rgb::new(20, 20, 28),
            bold: true,
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.level(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.lines(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, game.next_kind(), panel_x, y, viewport);
    }

    /// Draw the look-ahead shape as its 5x5 mask, one block per set bit.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        kind: ShapeKind,
        panel_x: u16,
        panel_y: u16,
        viewport: Viewport,
    ) {
        let style = CellStyle {
            fg: shape_color(kind),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        for (i, row) in shapes::mask(kind, 0).iter().enumerate() {
            let y = panel_y + i as u16;
            if y >= viewport.height {
                break;
            }
            for j in 0..MASK_SIZE {
                if (row >> (MASK_SIZE - 1 - j)) & 1 == 1 {
                    let px = panel_x + (j as u16) * self.cell_w;
                    fb.fill_rect(px, y, self.cell_w, 1, '█', style);
                }
            }
        }
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    fn count_blocks(fb: &FrameBuffer) -> usize {
        fb.cells().iter().filter(|c| c.ch == '█').count()
    }

    #[test]
    fn render_fills_the_viewport() {
        let game = Game::new(1);
        let view = GameView::default();
        let fb = view.render(&game, Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }

    #[test]
    fn fresh_spawn_draws_no_grid_blocks_inside_the_frame() {
        // The piece is entirely above the grid, so the only blocks on screen
        // belong to the NEXT preview in the side panel.
        let game = Game::new(1);
        let view = GameView::default();
        let fb = view.render(&game, Viewport::new(80, 24));

        // Preview blocks: 4 mask cells at 2 columns each.
        assert_eq!(count_blocks(&fb), 8);
    }

    #[test]
    fn locked_cells_are_drawn_in_the_shape_color() {
        let mut game = Game::new(7);
        game.apply_action(GameAction::HardDrop);
        let kind = match game
            .grid()
            .cells()
            .iter()
            .find_map(|c| *c)
        {
            Some(kind) => kind,
            None => unreachable!("hard drop locked nothing"),
        };

        let view = GameView::default();
        let fb = view.render(&game, Viewport::new(80, 24));
        let expected = shape_color(kind);
        assert!(fb
            .cells()
            .iter()
            .any(|c| c.ch == '█' && c.style.fg == expected));
    }

    #[test]
    fn side_panel_shows_the_labels() {
        let game = Game::new(1);
        let view = GameView::default();
        let fb = view.render(&game, Viewport::new(80, 24));

        let screen: String = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter_map(|(x, y)| fb.get(x, y))
            .map(|c| c.ch)
            .collect();
        for label in ["SCORE", "LEVEL", "LINES", "NEXT"] {
            assert!(screen.contains(label), "missing {} label", label);
        }
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let game = Game::new(1);
        let view = GameView::default();
        let fb = view.render(&game, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }

    #[test]
    fn shape_colors_are_distinct() {
        let mut colors: Vec<Rgb> = ShapeKind::ALL.iter().map(|&k| shape_color(k)).collect();
        colors.sort_by_key(|c| (c.r, c.g, c.b));
        colors.dedup();
        assert_eq!(colors.len(), 7);
    }
}
