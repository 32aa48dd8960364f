//! Tic Tac Toe — pure game logic (no rendering / IO).

use crate::scores::GameResult;

use super::state::{Mark, Outcome, TttState, WIN_LINES};

/// A uniform non-empty line wins; a full board without one is a tie.
pub fn check_outcome(board: &[Option<Mark>; 9]) -> Option<Outcome> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(Outcome::Win(mark));
            }
        }
    }
    if board.iter().all(|cell| cell.is_some()) {
        Some(Outcome::Tie)
    } else {
        None
    }
}

/// Place the current player's mark. Occupied cells and ended rounds are no-ops.
fn place(state: &mut TttState, idx: usize) {
    if idx >= 9 || state.board[idx].is_some() || state.outcome.is_some() {
        return;
    }

    state.board[idx] = Some(state.turn);

    if let Some(outcome) = check_outcome(&state.board) {
        state.outcome = Some(outcome);
        if outcome == Outcome::Win(Mark::X) {
            state.wins += 1;
        }
        state.games_played += 1;
        state.ai_timer.stop();
    } else {
        state.turn = state.turn.other();
        if state.turn == Mark::O {
            state.ai_timer.start();
        }
    }
}

/// Human move. Ignored while the AI is thinking.
pub fn human_move(state: &mut TttState, idx: usize) {
    if state.turn != Mark::X {
        return;
    }
    place(state, idx);
}

/// AI move: uniform random over the empty cells.
pub fn ai_move(state: &mut TttState) {
    if state.turn != Mark::O || state.outcome.is_some() {
        return;
    }
    let empties: Vec<usize> = (0..9).filter(|&i| state.board[i].is_none()).collect();
    if empties.is_empty() {
        return;
    }
    let pick = empties[state.rng.range(empties.len() as u32) as usize];
    place(state, pick);
}

pub fn tick(state: &mut TttState, delta_ticks: u32) {
    if state.ai_timer.advance(delta_ticks) > 0 {
        ai_move(state);
    }
}

/// Clear the board for another round. Counters persist.
pub fn reset_round(state: &mut TttState) {
    state.board = [None; 9];
    state.turn = Mark::X;
    state.outcome = None;
    state.ai_timer.stop();
}

/// Star rating from the cross-round win rate.
pub fn stars_for(state: &TttState) -> u8 {
    let rate = state.win_rate();
    if rate >= 70 {
        5
    } else if rate >= 50 {
        4
    } else if rate >= 30 {
        3
    } else if rate >= 10 {
        2
    } else {
        1
    }
}

/// End the session: total wins become the score. Idempotent.
pub fn finish(state: &mut TttState) {
    if state.finished {
        return;
    }
    state.finished = true;
    state.ai_timer.stop();
    state.result = Some(GameResult {
        score: state.wins,
        stars: stars_for(state),
    });
}
