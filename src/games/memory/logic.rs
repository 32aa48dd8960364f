//! Memory Match — pure game logic (no rendering / IO).

use crate::scores::GameResult;

use super::state::{Card, MemoryState, Phase, CARD_VALUES, TOTAL_PAIRS};

/// (Re)deal a shuffled deck and start the clock.
pub fn start(state: &mut MemoryState) {
    let mut deck: Vec<&'static str> = CARD_VALUES.iter().chain(CARD_VALUES.iter()).copied().collect();
    state.rng.shuffle(&mut deck);

    state.cards = deck
        .into_iter()
        .map(|value| Card {
            value,
            face_up: false,
            matched: false,
        })
        .collect();
    state.pending.clear();
    state.moves = 0;
    state.matches = 0;
    state.elapsed_ticks = 0;
    state.resolve_timer.stop();
    state.phase = Phase::Playing;
}

/// Flip a card face up. All illegal flips are silent no-ops: out of phase,
/// two cards already pending, or the card already revealed/matched.
pub fn flip(state: &mut MemoryState, idx: usize) {
    if state.phase != Phase::Playing {
        return;
    }
    if state.pending.len() >= 2 {
        return;
    }
    let Some(card) = state.cards.get(idx) else {
        return;
    };
    if card.face_up || card.matched {
        return;
    }

    state.cards[idx].face_up = true;
    state.pending.push(idx);

    // A move is the second card of an attempt.
    if state.pending.len() == 2 {
        state.moves += 1;
        state.resolve_timer.start();
    }
}

/// Resolve the revealed pair: equal values lock as matched, unequal flip back.
fn resolve(state: &mut MemoryState) {
    if state.pending.len() != 2 {
        state.pending.clear();
        return;
    }
    let (a, b) = (state.pending[0], state.pending[1]);

    if state.cards[a].value == state.cards[b].value {
        state.cards[a].matched = true;
        state.cards[b].matched = true;
        state.matches += 1;
        if state.matches == TOTAL_PAIRS {
            state.phase = Phase::Complete;
        }
    } else {
        state.cards[a].face_up = false;
        state.cards[b].face_up = false;
    }
    state.pending.clear();
}

pub fn tick(state: &mut MemoryState, delta_ticks: u32) {
    if state.phase != Phase::Playing {
        return;
    }
    state.elapsed_ticks += delta_ticks as u64;
    if state.resolve_timer.advance(delta_ticks) > 0 {
        resolve(state);
    }
}

/// Score: pair efficiency plus a time bonus under two minutes.
pub fn current_score(state: &MemoryState) -> u32 {
    let efficiency = if state.moves > 0 {
        (state.matches * 100) as f64 / state.moves as f64
    } else {
        0.0
    };
    let time_bonus = 120i64.saturating_sub(state.elapsed_secs() as i64).max(0) as f64;
    (efficiency + time_bonus).round() as u32
}

pub fn stars_for(score: u32) -> u8 {
    if score >= 150 {
        5
    } else if score >= 120 {
        4
    } else if score >= 90 {
        3
    } else if score >= 60 {
        2
    } else {
        1
    }
}

/// End the session. Idempotent.
pub fn finish(state: &mut MemoryState) {
    if state.finished {
        return;
    }
    state.finished = true;
    state.resolve_timer.stop();
    let score = current_score(state);
    state.result = Some(GameResult {
        score,
        stars: stars_for(score),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;
    use super::super::state::{RESOLVE_DELAY_TICKS, TOTAL_CARDS};
    use proptest::prelude::*;

    fn started(seed: u64) -> MemoryState {
        let mut state = MemoryState::with_rng(GameRng::seeded(seed));
        start(&mut state);
        state
    }

    /// Index of a card equal in value to `idx`, other than `idx` itself
    /// and anything already matched.
    fn partner_of(state: &MemoryState, idx: usize) -> usize {
        (0..TOTAL_CARDS)
            .find(|&i| i != idx && !state.cards[i].matched && state.cards[i].value == state.cards[idx].value)
            .unwrap()
    }

    /// Index of a card differing in value from `idx`.
    fn mismatch_of(state: &MemoryState, idx: usize) -> usize {
        (0..TOTAL_CARDS)
            .find(|&i| state.cards[i].value != state.cards[idx].value)
            .unwrap()
    }

    #[test]
    fn deal_is_sixteen_face_down_cards() {
        let state = started(1);
        assert_eq!(state.cards.len(), TOTAL_CARDS);
        assert!(state.cards.iter().all(|c| !c.face_up && !c.matched));
        // Every face appears an even number of times
        for face in ["🎯", "🎨", "🎭", "🎪"] {
            let count = state.cards.iter().filter(|c| c.value == face).count();
            assert_eq!(count, 4, "face {face} should appear 4 times");
        }
    }

    #[test]
    fn first_flip_reveals_without_counting_a_move() {
        let mut state = started(1);
        flip(&mut state, 0);
        assert!(state.cards[0].face_up);
        assert_eq!(state.pending, vec![0]);
        assert_eq!(state.moves, 0);
        assert!(!state.resolve_timer.is_running());
    }

    #[test]
    fn second_flip_counts_move_and_arms_timer() {
        let mut state = started(1);
        flip(&mut state, 0);
        flip(&mut state, 1);
        assert_eq!(state.moves, 1);
        assert!(state.resolve_timer.is_running());
    }

    #[test]
    fn third_flip_is_rejected_while_pending() {
        let mut state = started(1);
        flip(&mut state, 0);
        flip(&mut state, 1);
        flip(&mut state, 2);
        assert_eq!(state.pending.len(), 2);
        assert!(!state.cards[2].face_up);
    }

    #[test]
    fn same_card_cannot_flip_twice() {
        let mut state = started(1);
        flip(&mut state, 5);
        flip(&mut state, 5);
        assert_eq!(state.pending, vec![5]);
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn matching_pair_locks_after_delay() {
        let mut state = started(1);
        let a = 0;
        let b = partner_of(&state, a);
        flip(&mut state, a);
        flip(&mut state, b);

        tick(&mut state, RESOLVE_DELAY_TICKS - 1);
        assert_eq!(state.matches, 0); // still revealed, unresolved
        tick(&mut state, 1);
        assert_eq!(state.matches, 1);
        assert!(state.cards[a].matched && state.cards[b].matched);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn mismatched_pair_flips_back() {
        let mut state = started(1);
        let a = 0;
        let b = mismatch_of(&state, a);
        flip(&mut state, a);
        flip(&mut state, b);
        tick(&mut state, RESOLVE_DELAY_TICKS);
        assert!(!state.cards[a].face_up && !state.cards[b].face_up);
        assert_eq!(state.matches, 0);
        assert!(state.pending.is_empty());
        assert_eq!(state.moves, 1); // the attempt still counted
    }

    #[test]
    fn completing_all_pairs_ends_game() {
        let mut state = started(2);
        while state.phase == Phase::Playing {
            let a = (0..TOTAL_CARDS)
                .find(|&i| !state.cards[i].matched)
                .unwrap();
            let b = partner_of(&state, a);
            flip(&mut state, a);
            flip(&mut state, b);
            tick(&mut state, RESOLVE_DELAY_TICKS);
        }
        assert_eq!(state.phase, Phase::Complete);
        assert_eq!(state.matches, TOTAL_PAIRS);
        assert_eq!(state.moves, TOTAL_PAIRS);
    }

    #[test]
    fn flips_ignored_before_start_and_after_complete() {
        let mut state = MemoryState::with_rng(GameRng::seeded(1));
        flip(&mut state, 0); // no deck yet
        assert!(state.pending.is_empty());

        start(&mut state);
        state.phase = Phase::Complete;
        flip(&mut state, 0);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn clock_stops_when_complete() {
        let mut state = started(1);
        state.phase = Phase::Complete;
        let before = state.elapsed_ticks;
        tick(&mut state, 100);
        assert_eq!(state.elapsed_ticks, before);
    }

    #[test]
    fn score_perfect_run() {
        let mut state = started(1);
        state.moves = 8;
        state.matches = 8;
        state.elapsed_ticks = 0;
        // 8*100/8 + 120 = 220
        assert_eq!(current_score(&state), 220);
        assert_eq!(stars_for(current_score(&state)), 5);
    }

    #[test]
    fn score_without_moves_is_time_bonus_only() {
        let mut state = started(1);
        state.elapsed_ticks = 30 * crate::time::TICKS_PER_SEC as u64;
        assert_eq!(current_score(&state), 90);
    }

    #[test]
    fn time_bonus_floors_at_zero() {
        let mut state = started(1);
        state.moves = 10;
        state.matches = 5;
        state.elapsed_ticks = 500 * crate::time::TICKS_PER_SEC as u64;
        // efficiency 50, no time bonus
        assert_eq!(current_score(&state), 50);
    }

    #[test]
    fn star_thresholds() {
        assert_eq!(stars_for(150), 5);
        assert_eq!(stars_for(149), 4);
        assert_eq!(stars_for(120), 4);
        assert_eq!(stars_for(90), 3);
        assert_eq!(stars_for(60), 2);
        assert_eq!(stars_for(59), 1);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut state = started(1);
        state.moves = 8;
        state.matches = 8;
        finish(&mut state);
        assert!(state.result.is_some());
        state.result = None;
        finish(&mut state);
        assert_eq!(state.result, None);
    }

    proptest! {
        // No flip sequence can ever leave more than 2 cards pending, and
        // matches only ever move when the revealed pair is equal.
        #[test]
        fn pending_never_exceeds_two(
            seed in any::<u64>(),
            flips in proptest::collection::vec(0usize..TOTAL_CARDS, 0..50),
            tick_after in proptest::collection::vec(any::<bool>(), 0..50),
        ) {
            let mut state = started(seed);
            for (i, &idx) in flips.iter().enumerate() {
                flip(&mut state, idx);
                prop_assert!(state.pending.len() <= 2);

                let matches_before = state.matches;
                if *tick_after.get(i).unwrap_or(&false) {
                    let had_pair = state.pending.len() == 2;
                    tick(&mut state, RESOLVE_DELAY_TICKS);
                    if had_pair {
                        prop_assert!(state.pending.is_empty());
                    }
                }
                prop_assert!(state.matches >= matches_before);
            }
        }
    }
}
