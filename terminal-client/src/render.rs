use tictactoe_common::games::tictactoe::{GameStatus, Player, TicTacToeGameState};

pub const TITLE_WIDTH: usize = 68;

pub fn render_title(title: &str) -> String {
    let inner = format!("[[ {} ]]", title);
    let padding = TITLE_WIDTH.saturating_sub(inner.len() + 4) / 2;
    format!(
        "{}\n==={}{}{}==",
        "=".repeat(TITLE_WIDTH),
        "=".repeat(padding),
        inner,
        "=".repeat(padding)
    )
}

/// Three `|`-separated rows, followed by the winning line if there is one.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let mut out = state.board.to_string();
    if let Some(line) = state.winning_line {
        let [a, b, c] = line.cells;
        out.push_str(&format!("\n({} completes cells {}, {}, {})", line.player, a, b, c));
    }
    out
}

pub fn outcome_message(status: GameStatus, human: Player) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some("It's a draw!"),
        _ if status.winner() == Some(human) => Some("You win!!"),
        _ => Some("AI wins!"),
    }
}
