pub mod config;
pub mod game;
pub mod logger;
pub mod session;

pub use config::EngineConfig;
pub use game::{
    BOARD_SIDE, Board, CELL_COUNT, GameState, GameStatus, LineKind, Mark, WinningLine, check_win,
};
pub use logger::init_logger;
pub use session::{GameBroadcaster, GameController, GameOverNotification, GameStateUpdate};
