/// Who gets X, and with it the first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstPlayerMode {
    Human,
    Ai,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub first_player_mode: FirstPlayerMode,
    /// Play the human's last move automatically when only one cell is left.
    pub auto_play_forced_move: bool,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            first_player_mode: FirstPlayerMode::Human,
            auto_play_forced_move: true,
        }
    }
}
