//! Game trait and game selection logic.

pub mod memory;
pub mod puzzle;
pub mod quiz;
pub mod snake;
pub mod tictactoe;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::scores::{GameId, GameResult};

/// Trait that all games implement.
pub trait Game {
    /// Handle an input event. Returns true if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance game logic by `delta_ticks` discrete ticks.
    fn tick(&mut self, delta_ticks: u32);

    /// Render the game into the given area.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);

    /// Take the pending result of a finished session, if any.
    ///
    /// The container polls this after input and ticks; a `Some` means the
    /// player hit the finish action. Taking consumes the result, so a
    /// session is recorded at most once no matter how often finish fires.
    fn take_result(&mut self) -> Option<GameResult>;
}

/// Top-level application state. At most one game is mounted at a time;
/// its state (including all timers) is dropped when it unmounts.
pub enum AppState {
    /// Showing game selection menu.
    Menu,
    /// Playing a game.
    Playing {
        id: GameId,
        game: Box<dyn Game>,
    },
}

/// Create a game instance from a menu choice.
pub fn create_game(id: GameId) -> Box<dyn Game> {
    match id {
        GameId::TicTacToe => Box::new(tictactoe::TicTacToeGame::new()),
        GameId::Snake => Box::new(snake::SnakeGame::new()),
        GameId::Memory => Box::new(memory::MemoryGame::new()),
        GameId::Puzzle => Box::new(puzzle::PuzzleGame::new()),
        GameId::Quiz => Box::new(quiz::QuizGame::new()),
    }
}
