//! Quiz state: one timed question at a time over a fixed bank.

use crate::scores::GameResult;
use crate::time::{TickTimer, TICKS_PER_SEC};

use super::questions::QUESTIONS;

/// 30 seconds per question.
pub const QUESTION_TICKS: u32 = 30 * TICKS_PER_SEC;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    Result,
}

pub struct QuizState {
    pub current: usize,
    pub selected: Option<usize>,
    pub score: u32,
    /// Committed answer per question; None for a timeout with no pick.
    pub answers: Vec<Option<usize>>,
    pub question_timer: TickTimer,
    pub phase: Phase,
    pub finished: bool,
    pub result: Option<GameResult>,
}

impl QuizState {
    pub fn new() -> Self {
        Self {
            current: 0,
            selected: None,
            score: 0,
            answers: Vec::new(),
            question_timer: TickTimer::one_shot(QUESTION_TICKS),
            phase: Phase::Ready,
            finished: false,
            result: None,
        }
    }

    pub fn total_questions(&self) -> usize {
        QUESTIONS.len()
    }

    pub fn seconds_left(&self) -> u32 {
        self.question_timer.remaining().div_ceil(TICKS_PER_SEC)
    }
}
