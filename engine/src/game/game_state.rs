use super::board::Board;
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::check_win;

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    // Occupied cells, out-of-range indices and moves after game over are
    // ignored rather than surfaced as errors; the return value only tells
    // the caller whether anything changed.
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }

        if self.board.get(index) != Some(Mark::Empty) {
            return false;
        }

        self.board.place(index, self.current_mark);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        true
    }

    fn switch_turn(&mut self) {
        if let Some(opponent) = self.current_mark.opponent() {
            self.current_mark = opponent;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win(&self.board) {
            self.status = match line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn status_text(&self) -> &'static str {
        match (self.status, self.current_mark) {
            (GameStatus::InProgress, Mark::O) => "It's O's turn!",
            (GameStatus::InProgress, _) => "It's X's turn!",
            (GameStatus::XWon, _) => "Player X won!",
            (GameStatus::OWon, _) => "Player O won!",
            (GameStatus::Draw, _) => "It's a draw!",
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
