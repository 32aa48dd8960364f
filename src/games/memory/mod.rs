//! Memory Match — find all matching pairs.

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

use state::{MemoryState, Phase, TOTAL_CARDS};

// ── Action IDs ───────────────────────────────────────────────
pub const CARD_BASE: u16 = 10; // +index 0..15
pub const START_GAME: u16 = 40;
pub const FINISH: u16 = 41;

/// Keyboard layout for the 16 cards in reading order. Skips 'f' so the
/// finish key never shadows a card.
pub const CARD_KEYS: [char; 16] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'g', 'h',
];

pub struct MemoryGame {
    pub state: MemoryState,
}

impl MemoryGame {
    pub fn new() -> Self {
        Self {
            state: MemoryState::new(),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if (CARD_BASE..CARD_BASE + TOTAL_CARDS as u16).contains(&id) => {
                logic::flip(&mut self.state, (id - CARD_BASE) as usize);
                true
            }
            START_GAME if self.state.phase != Phase::Playing => {
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
            'r' if self.state.phase != Phase::Playing => {
                logic::start(&mut self.state);
                true
            }
            'f' => {
                logic::finish(&mut self.state);
                true
            }
            _ => match CARD_KEYS.iter().position(|&k| k == key) {
                Some(idx) => {
                    logic::flip(&mut self.state, idx);
                    true
                }
                None => false,
            },
        }
    }
}

impl Game for MemoryGame {
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
