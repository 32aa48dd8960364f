//! Sliding puzzle — order the tiles 1 through 8.

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

use state::{Phase, PuzzleState, TOTAL_TILES};

// ── Action IDs ───────────────────────────────────────────────
pub const TILE_BASE: u16 = 10; // +board position 0..8
pub const START: u16 = 30;
pub const FINISH: u16 = 31;

pub struct PuzzleGame {
    pub state: PuzzleState,
}

impl PuzzleGame {
    pub fn new() -> Self {
        Self {
            state: PuzzleState::new(),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if (TILE_BASE..TILE_BASE + TOTAL_TILES as u16).contains(&id) => {
                logic::slide(&mut self.state, (id - TILE_BASE) as usize);
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
            // Keys address board positions, numpad style reading order.
            '1'..='9' => {
                logic::slide(&mut self.state, key as usize - '1' as usize);
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

impl Game for PuzzleGame {
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
