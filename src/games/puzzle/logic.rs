//! Sliding puzzle — pure game logic (no rendering / IO).

use crate::scores::GameResult;

use super::state::{Phase, PuzzleState, GRID_SIZE, SHUFFLE_SLIDES, WINNING};

/// Board positions orthogonally adjacent to `blank`.
pub fn valid_moves(blank: usize) -> Vec<usize> {
    let row = blank / GRID_SIZE;
    let col = blank % GRID_SIZE;
    let mut moves = Vec::with_capacity(4);
    if row > 0 {
        moves.push((row - 1) * GRID_SIZE + col);
    }
    if row < GRID_SIZE - 1 {
        moves.push((row + 1) * GRID_SIZE + col);
    }
    if col > 0 {
        moves.push(row * GRID_SIZE + (col - 1));
    }
    if col < GRID_SIZE - 1 {
        moves.push(row * GRID_SIZE + (col + 1));
    }
    moves
}

fn blank_index(tiles: &[Option<u8>]) -> usize {
    tiles.iter().position(|t| t.is_none()).unwrap_or(0)
}

/// Deal a fresh board and start the clock.
pub fn start(state: &mut PuzzleState) {
    state.tiles = WINNING;
    for _ in 0..SHUFFLE_SLIDES {
        let blank = blank_index(&state.tiles);
        let moves = valid_moves(blank);
        let pick = moves[state.rng.range(moves.len() as u32) as usize];
        state.tiles.swap(blank, pick);
    }
    state.moves = 0;
    state.elapsed_ticks = 0;
    state.phase = Phase::Playing;
}

/// Slide the tile at board position `idx` into the blank. Anything not
/// adjacent to the blank is a silent no-op.
pub fn slide(state: &mut PuzzleState, idx: usize) {
    if state.phase != Phase::Playing {
        return;
    }
    let blank = blank_index(&state.tiles);
    if !valid_moves(blank).contains(&idx) {
        return;
    }
    state.tiles.swap(blank, idx);
    state.moves += 1;
    if state.tiles == WINNING {
        state.phase = Phase::Solved;
    }
}

pub fn tick(state: &mut PuzzleState, delta_ticks: u32) {
    if state.phase == Phase::Playing {
        state.elapsed_ticks += delta_ticks as u64;
    }
}

/// Score: time bonus under five minutes plus a move-efficiency bonus.
pub fn current_score(state: &PuzzleState) -> u32 {
    let time_bonus = 300i64.saturating_sub(state.elapsed_secs() as i64).max(0) as u32;
    let move_bonus = 50u32.saturating_sub(state.moves.min(50));
    time_bonus + move_bonus
}

/// Stars reward a solved board; abandoning mid-puzzle is always 1.
pub fn stars_for(state: &PuzzleState) -> u8 {
    if state.phase != Phase::Solved {
        return 1;
    }
    let secs = state.elapsed_secs();
    if state.moves <= 25 && secs <= 60 {
        5
    } else if state.moves <= 35 && secs <= 120 {
        4
    } else if state.moves <= 50 && secs <= 180 {
        3
    } else if state.moves <= 75 {
        2
    } else {
        1
    }
}

/// End the session. Idempotent.
pub fn finish(state: &mut PuzzleState) {
    if state.finished {
        return;
    }
    state.finished = true;
    state.result = Some(GameResult {
        score: current_score(state),
        stars: stars_for(state),
    });
}
