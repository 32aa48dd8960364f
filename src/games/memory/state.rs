//! Memory Match state: a 4×4 deck of face-down cards.

use crate::rng::GameRng;
use crate::scores::GameResult;
use crate::time::TickTimer;

/// Half-deck of card faces; the deck is this doubled (16 cards, 8 pairs).
pub const CARD_VALUES: [&str; 8] = ["🎯", "🎨", "🎭", "🎪", "🎨", "🎯", "🎭", "🎪"];
pub const TOTAL_CARDS: usize = CARD_VALUES.len() * 2;
pub const TOTAL_PAIRS: u32 = CARD_VALUES.len() as u32;

/// Reveal time for a flipped pair before it resolves (1s).
pub const RESOLVE_DELAY_TICKS: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub value: &'static str,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    Complete,
}

pub struct MemoryState {
    pub cards: Vec<Card>,
    /// Indexes of the currently revealed, unresolved cards. Never exceeds 2.
    pub pending: Vec<usize>,
    pub moves: u32,
    pub matches: u32,
    pub elapsed_ticks: u64,
    pub resolve_timer: TickTimer,
    pub phase: Phase,
    pub rng: GameRng,
    pub finished: bool,
    pub result: Option<GameResult>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            cards: Vec::new(),
            pending: Vec::new(),
            moves: 0,
            matches: 0,
            elapsed_ticks: 0,
            resolve_timer: TickTimer::one_shot(RESOLVE_DELAY_TICKS),
            phase: Phase::Ready,
            rng,
            finished: false,
            result: None,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ticks / crate::time::TICKS_PER_SEC as u64
    }
}
