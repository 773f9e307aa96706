use std::fmt;
use std::str::FromStr;

use super::error::IllegalMove;
use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Player};

/// 3x3 grid in row-major order. `Copy`, so every search branch owns its own board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells_with(Mark::Empty)
    }

    /// Cells occupied by `player`, ascending.
    pub fn cells_of(&self, player: Player) -> Vec<usize> {
        self.cells_with(player.mark())
    }

    fn cells_with(&self, mark: Mark) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == mark)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Returns a new board with `player`'s mark at `index`; `self` is never modified.
    pub fn apply_move(&self, index: usize, player: Player) -> Result<Board, IllegalMove> {
        match self.get(index) {
            None => Err(IllegalMove::OutOfRange { index }),
            Some(Mark::Empty) => {
                let mut next = *self;
                next.cells[index] = player.mark();
                Ok(next)
            }
            Some(_) => Err(IllegalMove::Occupied { index }),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

/// Parses nine cell characters (`X`, `O`, `_`/`.`); `|`, `/`, commas and whitespace
/// between cells are ignored.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | ',' | '\n' | '\r' | '\t' | ' '))
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "expected {} cells, got {} in '{}'",
                CELL_COUNT,
                symbols.len(),
                s
            ));
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = Mark::from_char(symbol)
                .ok_or_else(|| format!("invalid cell '{}' at position {} in '{}'", symbol, index, s))?;
        }
        Ok(Self::from_cells(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|mark| mark.to_char().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
