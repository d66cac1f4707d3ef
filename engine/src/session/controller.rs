use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use super::broadcaster::GameBroadcaster;
use super::update::{GameOverNotification, GameStateUpdate};
use crate::config::EngineConfig;
use crate::game::GameState;
use crate::log;

// Owns the game state and drives the move -> win-check -> notify ->
// delayed-reset cycle. Hosts clone it freely; all clones share one board.
#[derive(Clone)]
pub struct GameController<B: GameBroadcaster> {
    state: Arc<Mutex<GameState>>,
    broadcaster: B,
    reset_delay: Duration,
}

impl<B: GameBroadcaster> GameController<B> {
    pub fn new(broadcaster: B, reset_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(GameState::new())),
            broadcaster,
            reset_delay,
        }
    }

    pub fn from_config(config: &EngineConfig, broadcaster: B) -> Self {
        Self::new(broadcaster, Duration::from_secs(config.reset_delay_secs))
    }

    pub async fn apply_move(&self, index: usize) {
        let (update, game_over) = {
            let mut state = self.state.lock().await;
            if !state.apply_move(index) {
                return;
            }

            let update = GameStateUpdate::from_state(&state);
            let game_over = state
                .is_terminal()
                .then(|| GameOverNotification::from_state(&state));
            (update, game_over)
        };

        log!("Cell {} marked {}", index, update.board[index].symbol());
        self.broadcaster.broadcast_state(update.clone()).await;

        if let Some(notification) = game_over {
            log!("Game over: {}", update.status_text);
            self.broadcaster.broadcast_game_over(notification).await;
            self.schedule_reset();
        }
    }

    // One-shot: once scheduled the reset always fires. Moves landing in
    // the delay window are rejected by the terminal status, so the timer
    // never races a board mutation.
    fn schedule_reset(&self) {
        let state = Arc::clone(&self.state);
        let broadcaster = self.broadcaster.clone();
        let delay = self.reset_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let update = {
                let mut state = state.lock().await;
                state.reset();
                GameStateUpdate::from_state(&state)
            };

            log!("Board reset");
            broadcaster.broadcast_state(update).await;
        });
    }

    pub async fn reset(&self) {
        let update = {
            let mut state = self.state.lock().await;
            state.reset();
            GameStateUpdate::from_state(&state)
        };

        log!("Board reset");
        self.broadcaster.broadcast_state(update).await;
    }

    pub async fn snapshot(&self) -> GameStateUpdate {
        let state = self.state.lock().await;
        GameStateUpdate::from_state(&state)
    }
}
