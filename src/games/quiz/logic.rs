//! Quiz — pure game logic (no rendering / IO).

use crate::scores::GameResult;

use super::questions::QUESTIONS;
use super::state::{Phase, QuizState};

/// Reset to question 1 and start its countdown.
pub fn start(state: &mut QuizState) {
    state.current = 0;
    state.selected = None;
    state.score = 0;
    state.answers = vec![None; QUESTIONS.len()];
    state.phase = Phase::Playing;
    state.question_timer.start();
}

/// Pick (or re-pick) an option. Selecting never advances the question.
pub fn select(state: &mut QuizState, option: usize) {
    if state.phase != Phase::Playing || option >= QUESTIONS[state.current].options.len() {
        return;
    }
    state.selected = Some(option);
}

/// Commit the current selection and move on. A countdown timeout calls
/// this too, committing whatever was picked (possibly nothing).
pub fn advance(state: &mut QuizState) {
    if state.phase != Phase::Playing {
        return;
    }
    state.answers[state.current] = state.selected;
    if state.selected == Some(QUESTIONS[state.current].correct) {
        state.score += 1;
    }

    if state.current + 1 < QUESTIONS.len() {
        state.current += 1;
        state.selected = None;
        state.question_timer.start();
    } else {
        state.phase = Phase::Result;
        state.question_timer.stop();
    }
}

pub fn tick(state: &mut QuizState, delta_ticks: u32) {
    if state.phase != Phase::Playing {
        return;
    }
    if state.question_timer.advance(delta_ticks) > 0 {
        advance(state);
    }
}

pub fn percentage(state: &QuizState) -> u32 {
    state.score * 100 / QUESTIONS.len() as u32
}

pub fn stars_for(pct: u32) -> u8 {
    if pct >= 90 {
        5
    } else if pct >= 75 {
        4
    } else if pct >= 60 {
        3
    } else if pct >= 40 {
        2
    } else {
        1
    }
}

/// End the session. Idempotent.
pub fn finish(state: &mut QuizState) {
    if state.finished {
        return;
    }
    state.finished = true;
    state.question_timer.stop();
    state.result = Some(GameResult {
        score: state.score,
        stars: stars_for(percentage(state)),
    });
}
