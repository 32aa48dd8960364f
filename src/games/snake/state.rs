//! Snake state: grid, body, food, and phase.

use crate::input::ArrowKey;
use crate::rng::GameRng;
use crate::scores::GameResult;
use crate::time::TickTimer;

pub const GRID_SIZE: i32 = 15;
/// One body step every 3 ticks (150ms).
pub const MOVE_INTERVAL_TICKS: u32 = 3;
pub const FOOD_SCORE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_grid(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// Heading of the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Delta (dx, dy) for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn from_arrow(key: ArrowKey) -> Direction {
        match key {
            ArrowKey::Up => Direction::Up,
            ArrowKey::Down => Direction::Down,
            ArrowKey::Left => Direction::Left,
            ArrowKey::Right => Direction::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the first start, or paused.
    Ready,
    Running,
    GameOver,
}

pub struct SnakeState {
    /// Head first.
    pub snake: Vec<Pos>,
    pub food: Pos,
    pub dir: Direction,
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    pub move_timer: TickTimer,
    pub rng: GameRng,
    pub finished: bool,
    pub result: Option<GameResult>,
}

impl SnakeState {
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            snake: vec![Pos::new(7, 7)],
            food: Pos::new(10, 10),
            dir: Direction::Right,
            phase: Phase::Ready,
            score: 0,
            high_score: 0,
            move_timer: TickTimer::repeating(MOVE_INTERVAL_TICKS),
            rng,
            finished: false,
            result: None,
        }
    }
}
