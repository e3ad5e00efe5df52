//! Static shape catalog.
//!
//! Each shape has 1-4 rotation states, each encoded as a 5x5 bitmask grid:
//! row `i` of a state is a byte whose bit `(4 - j)` marks column `j` as
//! occupied, so a literal like `0b01110` reads left-to-right like the mask
//! it encodes. Absolute grid coordinates are produced by adding the anchor
//! plus a fixed centering bias of (-2, -4), which places freshly spawned
//! pieces entirely above the visible grid.

use arrayvec::ArrayVec;
use termtris_types::ShapeKind;

/// One rotation state: five mask rows, low 5 bits used.
pub type RotationMask = [u8; 5];

/// Mask width/height.
pub const MASK_SIZE: usize = 5;

/// Centering bias applied to mask coordinates (dx, dy).
pub const CENTER_BIAS: (i8, i8) = (-2, -4);

/// Cells occupied by one rotation state (always 4 for a tetromino).
pub type ShapeCells = ArrayVec<(i8, i8), 4>;

const S_MASKS: [RotationMask; 2] = [
    [0b00000, 0b00000, 0b00110, 0b01100, 0b00000],
    [0b00000, 0b00100, 0b00110, 0b00010, 0b00000],
];

const Z_MASKS: [RotationMask; 2] = [
    [0b00000, 0b00000, 0b01100, 0b00110, 0b00000],
    [0b00000, 0b00100, 0b01100, 0b01000, 0b00000],
];

const I_MASKS: [RotationMask; 2] = [
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00000],
    [0b00000, 0b11110, 0b00000, 0b00000, 0b00000],
];

const O_MASKS: [RotationMask; 1] = [[0b00000, 0b00000, 0b01100, 0b01100, 0b00000]];

const J_MASKS: [RotationMask; 4] = [
    [0b00000, 0b01000, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00110, 0b00100, 0b00100, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b00010, 0b00000],
    [0b00000, 0b00100, 0b00100, 0b01100, 0b00000],
];

const L_MASKS: [RotationMask; 4] = [
    [0b00000, 0b00010, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00100, 0b00100, 0b00110, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b01000, 0b00000],
    [0b00000, 0b01100, 0b00100, 0b00100, 0b00000],
];

const T_MASKS: [RotationMask; 4] = [
    [0b00000, 0b00100, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00100, 0b00110, 0b00100, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b00100, 0b00000],
    [0b00000, 0b00100, 0b01100, 0b00100, 0b00000],
];

/// All rotation states of a shape, in rotation order.
pub fn masks(kind: ShapeKind) -> &'static [RotationMask] {
    match kind {
        ShapeKind::S => &S_MASKS,
        ShapeKind::Z => &Z_MASKS,
        ShapeKind::I => &I_MASKS,
        ShapeKind::O => &O_MASKS,
        ShapeKind::J => &J_MASKS,
        ShapeKind::L => &L_MASKS,
        ShapeKind::T => &T_MASKS,
    }
}

/// Number of rotation states of a shape.
pub fn rotation_count(kind: ShapeKind) -> u8 {
    masks(kind).len() as u8
}

/// Mask for a rotation index; the index wraps modulo the state count, so no
/// caller has to bounds-check it.
pub fn mask(kind: ShapeKind, rotation: u8) -> &'static RotationMask {
    let states = masks(kind);
    &states[(rotation as usize) % states.len()]
}

/// Occupied offsets of a rotation state relative to the piece anchor,
/// centering bias included.
pub fn cell_offsets(kind: ShapeKind, rotation: u8) -> ShapeCells {
    let mut cells = ShapeCells::new();
    let (bias_x, bias_y) = CENTER_BIAS;
    for (i, row) in mask(kind, rotation).iter().enumerate() {
        for j in 0..MASK_SIZE {
            if (row >> (MASK_SIZE - 1 - j)) & 1 == 1 {
                cells.push((j as i8 + bias_x, i as i8 + bias_y));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rotation_state_has_four_cells() {
        for kind in ShapeKind::ALL {
            for rotation in 0..rotation_count(kind) {
                assert_eq!(
                    cell_offsets(kind, rotation).len(),
                    4,
                    "{:?} rotation {} is not a tetromino",
                    kind,
                    rotation
                );
            }
        }
    }

    #[test]
    fn rotation_counts_match_catalog() {
        assert_eq!(rotation_count(ShapeKind::S), 2);
        assert_eq!(rotation_count(ShapeKind::Z), 2);
        assert_eq!(rotation_count(ShapeKind::I), 2);
        assert_eq!(rotation_count(ShapeKind::O), 1);
        assert_eq!(rotation_count(ShapeKind::J), 4);
        assert_eq!(rotation_count(ShapeKind::L), 4);
        assert_eq!(rotation_count(ShapeKind::T), 4);
    }

    #[test]
    fn rotation_index_wraps() {
        for kind in ShapeKind::ALL {
            let n = rotation_count(kind);
            assert_eq!(cell_offsets(kind, 0), cell_offsets(kind, n));
            assert_eq!(cell_offsets(kind, 1), cell_offsets(kind, n + 1));
            // Indices far past the state count wrap too.
            assert_eq!(cell_offsets(kind, 2), cell_offsets(kind, n * 10 + 2));
        }
    }

    #[test]
    fn offsets_are_centered() {
        // With the (-2, -4) bias every offset sits in x -2..=2, y -4..=0.
        for kind in ShapeKind::ALL {
            for rotation in 0..rotation_count(kind) {
                for (dx, dy) in cell_offsets(kind, rotation) {
                    assert!((-2..=2).contains(&dx), "{:?}: dx {} out of range", kind, dx);
                    assert!((-4..=0).contains(&dy), "{:?}: dy {} out of range", kind, dy);
                }
            }
        }
    }

    #[test]
    fn i_shape_horizontal_state_spans_four_columns() {
        let cells = cell_offsets(ShapeKind::I, 1);
        let xs: Vec<i8> = cells.iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, vec![-2, -1, 0, 1]);
        assert!(cells.iter().all(|&(_, y)| y == -3));
    }

    #[test]
    fn o_shape_is_a_square() {
        let cells = cell_offsets(ShapeKind::O, 0);
        assert_eq!(cells.as_slice(), &[(-1, -2), (0, -2), (-1, -1), (0, -1)]);
    }
}
