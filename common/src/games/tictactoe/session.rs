use crate::games::SessionRng;
use crate::log;
use super::bot_controller::BotInput;
use super::error::{GameError, SessionError};
use super::game_state::TicTacToeGameState;
use super::settings::{FirstPlayerMode, TicTacToeSessionSettings};
use super::types::{GameStatus, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingHumanMove,
    AiThinking,
    GameOver(GameStatus),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The human picked a cell.
    CellChosen(usize),
    /// The engine finished computing its move.
    AiMoveReady(usize),
}

/// Human-versus-bot game driven by discrete UI events. The session never runs
/// the search itself; the shell takes [`TicTacToeSession::bot_input`] while the
/// phase is `AiThinking` and reports the result back as `AiMoveReady`.
#[derive(Debug)]
pub struct TicTacToeSession {
    game_state: TicTacToeGameState,
    human: Player,
    ai: Player,
    phase: SessionPhase,
    auto_play_forced_move: bool,
    forced_move: Option<usize>,
}

impl TicTacToeSession {
    pub fn new(settings: &TicTacToeSessionSettings, rng: &mut SessionRng) -> Self {
        let human_moves_first = match settings.first_player_mode {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Ai => false,
            FirstPlayerMode::Random => rng.random_bool(),
        };
        let (human, ai) = if human_moves_first {
            (Player::X, Player::O)
        } else {
            (Player::O, Player::X)
        };

        let mut session = Self {
            game_state: TicTacToeGameState::new(),
            human,
            ai,
            phase: SessionPhase::AwaitingHumanMove,
            auto_play_forced_move: settings.auto_play_forced_move,
            forced_move: None,
        };
        session.phase = session.next_phase();

        log!(
            "Session created: human plays {}, ai plays {} (seed {})",
            human,
            ai,
            rng.seed()
        );

        session
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn ai(&self) -> Player {
        self.ai
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    /// Cell filled for the human because it was the only one left.
    pub fn forced_move(&self) -> Option<usize> {
        self.forced_move
    }

    pub fn bot_input(&self) -> Option<BotInput> {
        match self.phase {
            SessionPhase::AiThinking => Some(BotInput::from_game_state(&self.game_state)),
            _ => None,
        }
    }

    /// Rejected events leave the session unchanged.
    pub fn handle_event(&mut self, event: SessionEvent) -> Result<SessionPhase, SessionError> {
        let index = match (self.phase, event) {
            (SessionPhase::GameOver(_), _) => return Err(GameError::GameOver.into()),
            (SessionPhase::AwaitingHumanMove, SessionEvent::CellChosen(index))
            | (SessionPhase::AiThinking, SessionEvent::AiMoveReady(index)) => index,
            _ => return Err(SessionError::NotYourTurn),
        };

        let mover = self.game_state.current_player;
        self.game_state.place_mark(index)?;
        log!("{} played cell {}", mover, index);

        if mover == self.ai {
            self.play_forced_move()?;
        }

        self.phase = self.next_phase();
        if let SessionPhase::GameOver(status) = self.phase {
            log!("Game over: {:?}", status);
        }
        Ok(self.phase)
    }

    fn play_forced_move(&mut self) -> Result<(), SessionError> {
        if !self.auto_play_forced_move || self.game_state.status.is_over() {
            return Ok(());
        }

        if let [index] = self.game_state.board.empty_cells()[..] {
            self.game_state.place_mark(index)?;
            self.forced_move = Some(index);
            log!("{} forced into the last cell {}", self.human, index);
        }
        Ok(())
    }

    fn next_phase(&self) -> SessionPhase {
        if self.game_state.status.is_over() {
            SessionPhase::GameOver(self.game_state.status)
        } else if self.game_state.current_player == self.ai {
            SessionPhase::AiThinking
        } else {
            SessionPhase::AwaitingHumanMove
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::bot_controller::calculate_move;
    use crate::games::tictactoe::error::IllegalMove;

    fn settings(first_player_mode: FirstPlayerMode) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            first_player_mode,
            auto_play_forced_move: true,
        }
    }

    fn ai_turn(session: &mut TicTacToeSession) -> Result<SessionPhase, SessionError> {
        let input = session.bot_input().unwrap();
        let index = calculate_move(&input).unwrap();
        session.handle_event(SessionEvent::AiMoveReady(index))
    }

    #[test]
    fn test_human_first_gets_x() {
        let session = TicTacToeSession::new(&settings(FirstPlayerMode::Human), &mut SessionRng::new(1));
        assert_eq!(session.human(), Player::X);
        assert_eq!(session.ai(), Player::O);
        assert_eq!(session.phase(), SessionPhase::AwaitingHumanMove);
        assert!(session.bot_input().is_none());
    }

    #[test]
    fn test_ai_first_starts_thinking() {
        let session = TicTacToeSession::new(&settings(FirstPlayerMode::Ai), &mut SessionRng::new(1));
        assert_eq!(session.ai(), Player::X);
        assert_eq!(session.phase(), SessionPhase::AiThinking);
        assert_eq!(session.bot_input().map(|input| input.bot), Some(Player::X));
    }

    #[test]
    fn test_random_mode_depends_only_on_seed() {
        let a = TicTacToeSession::new(&settings(FirstPlayerMode::Random), &mut SessionRng::new(99));
        let b = TicTacToeSession::new(&settings(FirstPlayerMode::Random), &mut SessionRng::new(99));
        assert_eq!(a.human(), b.human());
        assert_eq!(a.human().opponent(), a.ai());
    }

    #[test]
    fn test_human_move_hands_turn_to_ai() {
        let mut session = TicTacToeSession::new(&settings(FirstPlayerMode::Human), &mut SessionRng::new(1));
        assert_eq!(
            session.handle_event(SessionEvent::CellChosen(0)),
            Ok(SessionPhase::AiThinking)
        );
        assert_eq!(ai_turn(&mut session), Ok(SessionPhase::AwaitingHumanMove));
        assert_eq!(session.game_state().last_move, Some(4));
    }

    #[test]
    fn test_events_out_of_turn_are_rejected() {
        let mut session = TicTacToeSession::new(&settings(FirstPlayerMode::Human), &mut SessionRng::new(1));
        assert_eq!(
            session.handle_event(SessionEvent::AiMoveReady(0)),
            Err(SessionError::NotYourTurn)
        );
        session.handle_event(SessionEvent::CellChosen(0)).unwrap();
        assert_eq!(
            session.handle_event(SessionEvent::CellChosen(1)),
            Err(SessionError::NotYourTurn)
        );
        assert_eq!(session.phase(), SessionPhase::AiThinking);
    }

    #[test]
    fn test_illegal_human_move_keeps_waiting() {
        let mut session = TicTacToeSession::new(&settings(FirstPlayerMode::Human), &mut SessionRng::new(1));
        session.handle_event(SessionEvent::CellChosen(0)).unwrap();
        ai_turn(&mut session).unwrap();
        assert_eq!(
            session.handle_event(SessionEvent::CellChosen(4)),
            Err(SessionError::Game(GameError::IllegalMove(IllegalMove::Occupied { index: 4 })))
        );
        assert_eq!(session.phase(), SessionPhase::AwaitingHumanMove);
        assert_eq!(
            session.handle_event(SessionEvent::CellChosen(12)),
            Err(SessionError::Game(GameError::IllegalMove(IllegalMove::OutOfRange { index: 12 })))
        );
    }

    #[test]
    fn test_ai_punishes_weak_play() {
        let mut session = TicTacToeSession::new(&settings(FirstPlayerMode::Human), &mut SessionRng::new(1));
        session.handle_event(SessionEvent::CellChosen(0)).unwrap();
        ai_turn(&mut session).unwrap();
        session.handle_event(SessionEvent::CellChosen(1)).unwrap();
        ai_turn(&mut session).unwrap();
        assert_eq!(session.game_state().last_move, Some(2));
        // O now threatens 2-4-6; ignore it
        session.handle_event(SessionEvent::CellChosen(8)).unwrap();
        assert_eq!(ai_turn(&mut session), Ok(SessionPhase::GameOver(GameStatus::OWon)));
        assert_eq!(session.game_state().get_winner(), Some(Player::O));
        assert_eq!(
            session.handle_event(SessionEvent::CellChosen(3)),
            Err(SessionError::Game(GameError::GameOver))
        );
    }

    fn optimal_human_turn(session: &mut TicTacToeSession) -> Result<SessionPhase, SessionError> {
        let input = BotInput {
            board: session.game_state().board,
            bot: session.human(),
        };
        let index = calculate_move(&input).unwrap();
        session.handle_event(SessionEvent::CellChosen(index))
    }

    fn play_until_human_has_last_cell(session: &mut TicTacToeSession) -> SessionPhase {
        let mut phase = session.phase();
        loop {
            phase = match phase {
                SessionPhase::AiThinking => ai_turn(session).unwrap(),
                SessionPhase::AwaitingHumanMove
                    if session.game_state().board.empty_cells().len() > 1 =>
                {
                    optimal_human_turn(session).unwrap()
                }
                _ => return phase,
            };
        }
    }

    #[test]
    fn test_last_cell_is_played_for_human() {
        let mut session = TicTacToeSession::new(&settings(FirstPlayerMode::Human), &mut SessionRng::new(1));
        let phase = play_until_human_has_last_cell(&mut session);
        assert_eq!(phase, SessionPhase::GameOver(GameStatus::Draw));
        assert!(session.game_state().board.is_full());
        let forced = session.forced_move().unwrap();
        assert_eq!(session.game_state().last_move, Some(forced));
    }

    #[test]
    fn test_forced_move_disabled_waits_for_human() {
        let mut session = TicTacToeSession::new(
            &TicTacToeSessionSettings {
                first_player_mode: FirstPlayerMode::Human,
                auto_play_forced_move: false,
            },
            &mut SessionRng::new(1),
        );
        let phase = play_until_human_has_last_cell(&mut session);
        assert_eq!(phase, SessionPhase::AwaitingHumanMove);
        let last = session.game_state().board.empty_cells();
        assert_eq!(last.len(), 1);
        assert_eq!(
            session.handle_event(SessionEvent::CellChosen(last[0])),
            Ok(SessionPhase::GameOver(GameStatus::Draw))
        );
        assert_eq!(session.forced_move(), None);
    }

    #[test]
    fn test_ai_moving_first_never_loses_to_naive_human() {
        let mut session = TicTacToeSession::new(&settings(FirstPlayerMode::Ai), &mut SessionRng::new(1));
        let mut phase = session.phase();
        while let SessionPhase::AiThinking | SessionPhase::AwaitingHumanMove = phase {
            phase = match phase {
                SessionPhase::AiThinking => ai_turn(&mut session).unwrap(),
                _ => {
                    let index = session.game_state().board.empty_cells()[0];
                    session.handle_event(SessionEvent::CellChosen(index)).unwrap()
                }
            };
        }
        assert_ne!(phase, SessionPhase::GameOver(GameStatus::OWon));
        assert_eq!(session.forced_move(), None);
    }
}
