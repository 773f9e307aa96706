use std::fmt;

/// A move that cannot be applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfRange { index: usize },
    Occupied { index: usize },
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfRange { index } => {
                write!(f, "cell {} is outside the board (expected 0..=8)", index)
            }
            IllegalMove::Occupied { index } => write!(f, "cell {} is already taken", index),
        }
    }
}

impl std::error::Error for IllegalMove {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    GameOver,
    IllegalMove(IllegalMove),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "game is already over"),
            GameError::IllegalMove(e) => write!(f, "illegal move: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(e) => Some(e),
            GameError::GameOver => None,
        }
    }
}

impl From<IllegalMove> for GameError {
    fn from(e: IllegalMove) -> Self {
        GameError::IllegalMove(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    NotYourTurn,
    Game(GameError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotYourTurn => write!(f, "not your turn"),
            SessionError::Game(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Game(e) => Some(e),
            SessionError::NotYourTurn => None,
        }
    }
}

impl From<GameError> for SessionError {
    fn from(e: GameError) -> Self {
        SessionError::Game(e)
    }
}
