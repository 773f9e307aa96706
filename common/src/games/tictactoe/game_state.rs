use super::board::Board;
use super::error::GameError;
use super::types::{GameStatus, Player, WinningLine};
use super::win_oracle::check_win_with_line;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    /// Places the current player's mark; the board is untouched on error.
    pub fn place_mark(&mut self, index: usize) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        self.board = self.board.apply_move(index, self.current_player)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = GameStatus::won_by(line.player);
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn get_winner(&self) -> Option<Player> {
        self.status.winner()
    }
}
