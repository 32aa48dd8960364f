//! Tic Tac Toe state: a 9-cell board plus cross-round counters.

use crate::rng::GameRng;
use crate::scores::GameResult;
use crate::time::TickTimer;

/// AI "thinking" delay before it places its mark (500ms).
pub const AI_DELAY_TICKS: u32 = 10;

/// The eight winning lines: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Tie,
}

pub struct TttState {
    pub board: [Option<Mark>; 9],
    /// Whose turn it is. The human always plays X.
    pub turn: Mark,
    pub outcome: Option<Outcome>,

    // Cross-round counters. Survive "play again", die with the engine.
    pub games_played: u32,
    pub wins: u32,

    /// Armed while the AI is "thinking".
    pub ai_timer: TickTimer,
    pub rng: GameRng,

    pub finished: bool,
    pub result: Option<GameResult>,
}

impl TttState {
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            board: [None; 9],
            turn: Mark::X,
            outcome: None,
            games_played: 0,
            wins: 0,
            ai_timer: TickTimer::one_shot(AI_DELAY_TICKS),
            rng,
            finished: false,
            result: None,
        }
    }

    /// Win rate as a whole percentage. 0% before the first finished round.
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            0
        } else {
            ((self.wins as f64 / self.games_played as f64) * 100.0).round() as u32
        }
    }
}
