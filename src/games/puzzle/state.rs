//! Sliding puzzle state: a 3×3 board with one blank.

use crate::rng::GameRng;
use crate::scores::GameResult;

pub const GRID_SIZE: usize = 3;
pub const TOTAL_TILES: usize = GRID_SIZE * GRID_SIZE;

/// Goal layout: 1..8 in reading order, blank last.
pub const WINNING: [Option<u8>; TOTAL_TILES] = [
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(8),
    None,
];

/// Random legal slides applied when dealing a new board. Shuffling by
/// legal moves keeps every deal solvable.
pub const SHUFFLE_SLIDES: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    Solved,
}

pub struct PuzzleState {
    pub tiles: [Option<u8>; TOTAL_TILES],
    pub moves: u32,
    pub elapsed_ticks: u64,
    pub phase: Phase,
    pub rng: GameRng,
    pub finished: bool,
    pub result: Option<GameResult>,
}

impl PuzzleState {
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            tiles: WINNING,
            moves: 0,
            elapsed_ticks: 0,
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
