//! Snake — grow the snake on a 15×15 grid.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ArrowKey, ClickState, InputEvent};
use crate::scores::GameResult;

use state::{Direction, Phase, SnakeState};

// ── Action IDs ───────────────────────────────────────────────
pub const START_RUN: u16 = 30;
pub const PAUSE_RUN: u16 = 31;
pub const FINISH: u16 = 32;

pub struct SnakeGame {
    pub state: SnakeState,
}

impl SnakeGame {
    pub fn new() -> Self {
        Self {
            state: SnakeState::new(),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            START_RUN if self.state.phase != Phase::Running => {
                logic::start(&mut self.state);
                true
            }
            PAUSE_RUN if self.state.phase == Phase::Running => {
                logic::pause(&mut self.state);
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
            // WASD steering, normalized to the same path as the arrow keys
            'w' => self.handle_arrow(ArrowKey::Up),
            'a' => self.handle_arrow(ArrowKey::Left),
            's' => self.handle_arrow(ArrowKey::Down),
            'd' => self.handle_arrow(ArrowKey::Right),
            'r' if self.state.phase != Phase::Running => {
                logic::start(&mut self.state);
                true
            }
            'p' if self.state.phase == Phase::Running => {
                logic::pause(&mut self.state);
                true
            }
            'f' => {
                logic::finish(&mut self.state);
                true
            }
            _ => false,
        }
    }

    fn handle_arrow(&mut self, key: ArrowKey) -> bool {
        if self.state.phase != Phase::Running {
            return false;
        }
        logic::set_direction(&mut self.state, Direction::from_arrow(key));
        true
    }
}

impl Game for SnakeGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Arrow(key) => self.handle_arrow(*key),
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
