use std::error::Error;
use std::io::Write;
use std::time::Duration;

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    FirstPlayerMode, GameStatus, SessionError, SessionEvent, SessionPhase, TicTacToeSession,
    TicTacToeSessionSettings, calculate_move, index_to_row_col,
};
use tictactoe_common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::config::Config;
use crate::input::{HumanInput, parse_move, parse_play_first};
use crate::render::{outcome_message, render_board, render_title};

pub type RunResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Plays one game over `reader`/`out`. Returns the final status, or `None` if
/// the player quit or the input ended first.
pub async fn run_game<R, W>(
    config: &Config,
    rng: &mut SessionRng,
    reader: R,
    out: &mut W,
) -> RunResult<Option<GameStatus>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();

    writeln!(out, "{}\n", render_title("Welcome to AI plays TicTacToe"))?;

    let first_player_mode = match config.first_player.to_mode() {
        Some(mode) => mode,
        None => {
            prompt(out, "Do you want to play first? [Y/n] ")?;
            let Some(answer) = lines.next_line().await? else {
                return Ok(None);
            };
            if parse_play_first(&answer) {
                FirstPlayerMode::Human
            } else {
                FirstPlayerMode::Ai
            }
        }
    };

    let settings = TicTacToeSessionSettings {
        first_player_mode,
        auto_play_forced_move: config.auto_play_forced_move,
    };
    let mut session = TicTacToeSession::new(&settings, rng);
    let ai_delay = Duration::from_millis(config.ai_delay_ms);

    writeln!(
        out,
        "AI will play '{}', you play '{}'.\n",
        session.ai(),
        session.human()
    )?;
    writeln!(out, "{}", render_board(session.game_state()))?;

    loop {
        match session.phase() {
            SessionPhase::AwaitingHumanMove => {
                if !human_turn(&mut session, &mut lines, out).await? {
                    writeln!(out, "\nBye!")?;
                    return Ok(None);
                }
            }
            SessionPhase::AiThinking => {
                ai_turn(&mut session, ai_delay, out).await?;
            }
            SessionPhase::GameOver(status) => {
                if let Some(message) = outcome_message(status, session.human()) {
                    writeln!(out, "\n{}", message)?;
                }
                return Ok(Some(status));
            }
        }
    }
}

/// `false` when the player wants to stop.
async fn human_turn<R, W>(
    session: &mut TicTacToeSession,
    lines: &mut Lines<R>,
    out: &mut W,
) -> RunResult<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "\nThis is your turn.\n")?;

    loop {
        prompt(out, "Make moves as (row, col)-coordinates (0, 1, 2), or q to quit: ")?;
        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };

        let index = match parse_move(&line) {
            Ok(HumanInput::Cell(index)) => index,
            Ok(HumanInput::Quit) => return Ok(false),
            Err(e) => {
                writeln!(out, "{} Try again.\n", e)?;
                continue;
            }
        };

        match session.handle_event(SessionEvent::CellChosen(index)) {
            Ok(_) => {
                writeln!(out, "{}", render_board(session.game_state()))?;
                return Ok(true);
            }
            Err(SessionError::Game(e)) => {
                log!("Rejected human move {}: {}", index, e);
                writeln!(out, "That spot is not available ({}). Try again.\n", e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

async fn ai_turn<W: Write>(
    session: &mut TicTacToeSession,
    ai_delay: Duration,
    out: &mut W,
) -> RunResult<()> {
    writeln!(out, "\nThis is AI's turn.\n")?;
    tokio::time::sleep(ai_delay).await;

    let Some(input) = session.bot_input() else {
        return Ok(());
    };
    let index = tokio::task::spawn_blocking(move || calculate_move(&input))
        .await?
        .ok_or("AI found no move on a board that is not finished")?;

    session.handle_event(SessionEvent::AiMoveReady(index))?;
    // the board already holds the human's forced reply
    if let Some(forced) = session.forced_move() {
        let (row, col) = index_to_row_col(forced);
        writeln!(
            out,
            "Only ({}, {}) was left, so it was played for you.\n",
            row, col
        )?;
    }
    writeln!(out, "{}", render_board(session.game_state()))?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W, text: &str) -> RunResult<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}
