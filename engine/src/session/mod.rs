mod broadcaster;
mod controller;
mod update;

pub use broadcaster::GameBroadcaster;
pub use controller::GameController;
pub use update::{GameOverNotification, GameStateUpdate};
