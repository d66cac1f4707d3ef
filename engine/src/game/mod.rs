mod board;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use game_state::GameState;
pub use types::{BOARD_SIDE, CELL_COUNT, GameStatus, LineKind, Mark, WinningLine};
pub use win_detector::check_win;
