mod board;
mod bot_controller;
mod error;
mod game_state;
pub mod magic;
mod minimax;
mod session;
mod settings;
mod types;
mod win_oracle;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_move};
pub use error::{GameError, IllegalMove, SessionError};
pub use game_state::TicTacToeGameState;
pub use magic::{board_index, magic_value};
pub use minimax::minimax;
pub use session::{SessionEvent, SessionPhase, TicTacToeSession};
pub use settings::{FirstPlayerMode, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, CELL_COUNT, GameStatus, Mark, MoveEvaluation, Player, Score, WinningLine,
    WinningMove, index_to_row_col, row_col_to_index,
};
pub use win_oracle::{check_win, check_win_with_line, find_winning_move};
