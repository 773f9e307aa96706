use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::minimax::minimax;
use super::types::Player;
use super::win_oracle::find_winning_move;

pub struct BotInput {
    pub board: Board,
    pub bot: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            bot: state.current_player,
        }
    }
}

/// Move of the optimal bot: complete its own line, else block the opponent's
/// line, else the minimax choice. `None` only on a full board.
pub fn calculate_move(input: &BotInput) -> Option<usize> {
    if let Some(winning_move) = find_winning_move(&input.board, input.bot) {
        return Some(winning_move.index);
    }

    if let Some(threat) = find_winning_move(&input.board, input.bot.opponent()) {
        return Some(threat.index);
    }

    minimax(input.board, input.bot).best_move
}
