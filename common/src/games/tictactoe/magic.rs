//! Magic-square encoding of the board.
//!
//! ```text
//! 8 3 4
//! 1 5 9
//! 6 7 2
//! ```
//!
//! Every row, column and diagonal sums to [`LINE_SUM`], and no other triple of
//! distinct values does, so "three cells form a line" becomes "three values sum
//! to 15".

use super::types::CELL_COUNT;

pub const LINE_SUM: u8 = 15;

pub const MAGIC_VALUES: [u8; CELL_COUNT] = [8, 3, 4, 1, 5, 9, 6, 7, 2];

/// Rows, columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const NO_INDEX: usize = usize::MAX;

const BOARD_INDICES: [usize; CELL_COUNT + 1] = invert(MAGIC_VALUES);

const fn invert(values: [u8; CELL_COUNT]) -> [usize; CELL_COUNT + 1] {
    let mut indices = [NO_INDEX; CELL_COUNT + 1];
    let mut i = 0;
    while i < CELL_COUNT {
        let value = values[i] as usize;
        assert!(value >= 1 && value <= CELL_COUNT, "magic value out of range");
        assert!(indices[value] == NO_INDEX, "magic value repeated");
        indices[value] = i;
        i += 1;
    }
    indices
}

const _: () = {
    let mut l = 0;
    while l < LINES.len() {
        let [a, b, c] = LINES[l];
        assert!(
            MAGIC_VALUES[a] + MAGIC_VALUES[b] + MAGIC_VALUES[c] == LINE_SUM,
            "line does not sum to LINE_SUM"
        );
        l += 1;
    }
};

pub fn magic_value(index: usize) -> u8 {
    MAGIC_VALUES[index]
}

/// Inverse of [`magic_value`]; `None` for values outside `1..=9`.
pub fn board_index(value: u8) -> Option<usize> {
    match BOARD_INDICES.get(value as usize) {
        Some(&index) if index != NO_INDEX => Some(index),
        _ => None,
    }
}

/// Index of the cell whose value completes a line with cells `a` and `b`, if any.
pub fn completing_index(a: usize, b: usize) -> Option<usize> {
    let remainder = LINE_SUM.checked_sub(magic_value(a) + magic_value(b))?;
    board_index(remainder).filter(|&c| c != a && c != b)
}

pub fn is_line(a: usize, b: usize, c: usize) -> bool {
    a != b && b != c && a != c && magic_value(a) + magic_value(b) + magic_value(c) == LINE_SUM
}
