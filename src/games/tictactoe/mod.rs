//! Tic Tac Toe — beat the random AI and grow your win rate.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};
use crate::scores::GameResult;

use state::TttState;

// ── Action IDs ───────────────────────────────────────────────
pub const CELL_BASE: u16 = 10; // +index 0..8
pub const RESET_ROUND: u16 = 30;
pub const FINISH: u16 = 31;

pub struct TicTacToeGame {
    pub state: TttState,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self {
            state: TttState::new(),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if (CELL_BASE..CELL_BASE + 9).contains(&id) => {
                logic::human_move(&mut self.state, (id - CELL_BASE) as usize);
                true
            }
            RESET_ROUND if self.state.outcome.is_some() => {
                logic::reset_round(&mut self.state);
                true
            }
            FINISH => {
                logic::finish(&mut self.state);
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            '1'..='9' => {
                let idx = key as usize - '1' as usize;
                logic::human_move(&mut self.state, idx);
                true
            }
            'r' if self.state.outcome.is_some() => {
                logic::reset_round(&mut self.state);
                true
            }
            'f' => {
                logic::finish(&mut self.state);
                true
            }
            _ => false,
        }
    }
}

impl Game for TicTacToeGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Arrow(_) => false,
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn take_result(&mut self) -> Option<GameResult> {
        self.state.result.take()
    }
}
