use super::board::Board;
use super::types::{MoveEvaluation, Player};
use super::win_oracle::find_winning_move;

/// Exhaustive minimax. X maximizes, O minimizes; among equally good cells the
/// lowest index is chosen.
///
/// A position where `to_move` can complete a line is scored immediately as a
/// win for `to_move`, a full board as a draw. The caller must not pass a board
/// that already contains a completed line.
pub fn minimax(board: Board, to_move: Player) -> MoveEvaluation {
    if let Some(winning_move) = find_winning_move(&board, to_move) {
        return winning_move.into();
    }

    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return MoveEvaluation::draw();
    }

    let opponent = to_move.opponent();
    let mut best: Option<MoveEvaluation> = None;

    for index in available_moves {
        let Ok(child) = board.apply_move(index, to_move) else {
            continue;
        };
        let score = minimax(child, opponent).score;

        let improves = match best {
            None => true,
            Some(current) => match to_move {
                Player::X => score > current.score,
                Player::O => score < current.score,
            },
        };
        if improves {
            best = Some(MoveEvaluation {
                best_move: Some(index),
                score,
            });
        }
    }

    best.unwrap_or_else(MoveEvaluation::draw)
}
