use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '_' | '.' | ' ' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

/// One of the two sides. X always moves first and maximizes the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Score of a forced win for this player: +1 for X, -1 for O.
    pub fn win_score(self) -> Score {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().to_char())
    }
}

/// Game value under optimal play: +1 X wins, -1 O wins, 0 draw.
pub type Score = i8;

/// A cell that completes a line for the player who owns the other two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningMove {
    pub index: usize,
    pub score: Score,
}

/// Result of a search: the cell to play (absent on a full board) and its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub best_move: Option<usize>,
    pub score: Score,
}

impl MoveEvaluation {
    pub fn draw() -> Self {
        Self {
            best_move: None,
            score: 0,
        }
    }
}

impl From<WinningMove> for MoveEvaluation {
    fn from(winning_move: WinningMove) -> Self {
        Self {
            best_move: Some(winning_move.index),
            score: winning_move.score,
        }
    }
}

/// Three cells of one completed line, in ascending index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWon,
            Player::O => GameStatus::OWon,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWon => Some(Player::X),
            GameStatus::OWon => Some(Player::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

pub fn index_to_row_col(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

pub fn row_col_to_index(row: usize, col: usize) -> Option<usize> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Some(row * BOARD_SIZE + col)
    } else {
        None
    }
}
