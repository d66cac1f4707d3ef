use crate::game::{CELL_COUNT, GameState, GameStatus, Mark, WinningLine};

#[derive(Clone, Debug)]
pub struct GameStateUpdate {
    pub board: [Mark; CELL_COUNT],
    pub status: GameStatus,
    pub current_mark: Mark,
    pub status_text: &'static str,
    pub winning_line: Option<WinningLine>,
}

impl GameStateUpdate {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            board: *state.board().cells(),
            status: state.status(),
            current_mark: state.current_mark(),
            status_text: state.status_text(),
            winning_line: state.winning_line(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameOverNotification {
    pub status: GameStatus,
    pub winner: Option<Mark>,
    pub winning_line: Option<WinningLine>,
}

impl GameOverNotification {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            status: state.status(),
            winner: state.status().winner(),
            winning_line: state.winning_line(),
        }
    }
}
