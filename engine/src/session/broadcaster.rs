use std::future::Future;

use super::update::{GameOverNotification, GameStateUpdate};

// The display layer's side of the engine: it receives a full state
// snapshot after every accepted move and a game-over notification when
// the state turns terminal.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
