//! Knowledge quiz — timed multiple choice over a fixed bank.

pub mod logic;
pub mod questions;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};
use crate::scores::GameResult;

use state::{Phase, QuizState};

// ── Action IDs ───────────────────────────────────────────────
pub const OPTION_BASE: u16 = 10; // +option 0..3
pub const NEXT: u16 = 20;
pub const START: u16 = 21;
pub const FINISH: u16 = 22;

pub struct QuizGame {
    pub state: QuizState,
}

impl QuizGame {
    pub fn new() -> Self {
        Self {
            state: QuizState::new(),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if (OPTION_BASE..OPTION_BASE + 4).contains(&id) => {
                logic::select(&mut self.state, (id - OPTION_BASE) as usize);
                true
            }
            NEXT if self.state.selected.is_some() => {
                logic::advance(&mut self.state);
                true
            }
            START if self.state.phase != Phase::Playing => {
                logic::start(&mut self.state);
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
            '1'..='4' => {
                logic::select(&mut self.state, key as usize - '1' as usize);
                true
            }
            'n' if self.state.selected.is_some() => {
                logic::advance(&mut self.state);
                true
            }
            'r' if self.state.phase != Phase::Playing => {
                logic::start(&mut self.state);
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

impl Game for QuizGame {
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
