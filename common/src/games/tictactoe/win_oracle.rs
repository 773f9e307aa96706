use super::board::Board;
use super::magic::{completing_index, is_line};
use super::types::{Player, WinningLine, WinningMove};

/// First cell that completes a line for `player`, scanning pairs of the
/// player's cells in ascending order. `None` with fewer than two marks or when
/// every completing cell is taken.
pub fn find_winning_move(board: &Board, player: Player) -> Option<WinningMove> {
    let owned = board.cells_of(player);

    for (i, &a) in owned.iter().enumerate() {
        for &b in &owned[i + 1..] {
            if let Some(index) = completing_index(a, b)
                && board.is_empty_cell(index)
            {
                return Some(WinningMove {
                    index,
                    score: player.win_score(),
                });
            }
        }
    }

    None
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// A completed line, checking X before O.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Player::X, Player::O]
        .into_iter()
        .find_map(|player| completed_line(board, player))
}

fn completed_line(board: &Board, player: Player) -> Option<WinningLine> {
    let owned = board.cells_of(player);

    for (i, &a) in owned.iter().enumerate() {
        for (j, &b) in owned.iter().enumerate().skip(i + 1) {
            for &c in &owned[j + 1..] {
                if is_line(a, b, c) {
                    return Some(WinningLine {
                        player,
                        cells: [a, b, c],
                    });
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::magic::LINES;
    use crate::games::tictactoe::types::{CELL_COUNT, Mark};
    use std::collections::HashSet;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completes_top_row() {
        let result = find_winning_move(&board("XX_OO____"), Player::X);
        assert_eq!(result, Some(WinningMove { index: 2, score: 1 }));
    }

    #[test]
    fn test_o_completes_middle_row_with_negative_score() {
        let result = find_winning_move(&board("XX_OO_X__"), Player::O);
        assert_eq!(result, Some(WinningMove { index: 5, score: -1 }));
    }

    #[test]
    fn test_blocked_line_is_not_a_win() {
        assert_eq!(find_winning_move(&board("XXO_O____"), Player::X), None);
    }

    #[test]
    fn test_fewer_than_two_marks_never_wins() {
        assert_eq!(find_winning_move(&Board::new(), Player::X), None);
        assert_eq!(find_winning_move(&board("____X____"), Player::X), None);
        assert_eq!(find_winning_move(&board("____X____"), Player::O), None);
    }

    #[test]
    fn test_first_pair_in_enumeration_order_wins() {
        // X at 0, 1, 4: pair (0,1) completes at 2 before pair (0,4) completes at 8
        let result = find_winning_move(&board("XX_OX_O__"), Player::X);
        assert_eq!(result.map(|m| m.index), Some(2));
    }

    #[test]
    fn test_diagonal_completion() {
        let result = find_winning_move(&board("X_O_X_O__"), Player::X);
        assert_eq!(result.map(|m| m.index), Some(8));
    }

    #[test]
    fn test_agrees_with_explicit_line_scan() {
        // every board with two marks of X on a line and the rest empty
        for line in LINES {
            for skip in 0..3 {
                let mut cells = [Mark::Empty; CELL_COUNT];
                for (k, &index) in line.iter().enumerate() {
                    if k != skip {
                        cells[index] = Mark::X;
                    }
                }
                let result = find_winning_move(&Board::from_cells(cells), Player::X);
                assert_eq!(result.map(|m| m.index), Some(line[skip]));
            }
        }
    }

    fn has_open_line(position: &Board, player: Player) -> bool {
        LINES.iter().any(|line| {
            let marks: Vec<Mark> = line.iter().filter_map(|&i| position.get(i)).collect();
            marks.iter().filter(|&&m| m == player.mark()).count() == 2
                && marks.iter().filter(|&&m| m == Mark::Empty).count() == 1
        })
    }

    #[test]
    fn test_agrees_with_line_scan_on_every_reachable_board() {
        let mut seen = HashSet::new();
        let mut pending = vec![(Board::new(), Player::X)];
        while let Some((position, to_move)) = pending.pop() {
            if !seen.insert(position) {
                continue;
            }
            for player in [Player::X, Player::O] {
                assert_eq!(
                    find_winning_move(&position, player).is_some(),
                    has_open_line(&position, player),
                    "{} for {}",
                    position,
                    player
                );
            }
            if check_win(&position).is_some() {
                continue;
            }
            for index in position.empty_cells() {
                let child = position.apply_move(index, to_move).unwrap();
                pending.push((child, to_move.opponent()));
            }
        }
        // 5478 distinct legal positions are reachable from the empty board
        assert_eq!(seen.len(), 5478);
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        let drawn = board("XOXXOOOXX");
        assert_eq!(check_win(&drawn), None);
        assert_eq!(find_winning_move(&drawn, Player::X), None);
        assert_eq!(find_winning_move(&drawn, Player::O), None);
    }

    #[test]
    fn test_check_win_with_line() {
        let won = board("OOX_X_XO_");
        assert_eq!(
            check_win_with_line(&won),
            Some(WinningLine {
                player: Player::X,
                cells: [2, 4, 6],
            })
        );
        assert_eq!(check_win(&board("OOOXX_X__")), Some(Player::O));
        assert_eq!(check_win(&board("XX_OO____")), None);
    }
}
