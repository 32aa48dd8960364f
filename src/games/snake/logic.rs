//! Snake — pure game logic (no rendering / IO).

use crate::scores::GameResult;

use super::state::{Direction, Phase, Pos, SnakeState, FOOD_SCORE, GRID_SIZE};

/// (Re)start a run from the initial layout.
pub fn start(state: &mut SnakeState) {
    state.snake = vec![Pos::new(7, 7)];
    state.food = Pos::new(10, 10);
    state.dir = Direction::Right;
    state.score = 0;
    state.phase = Phase::Running;
    state.move_timer.start();
}

/// Pause the run and bank the high score.
pub fn pause(state: &mut SnakeState) {
    if state.phase != Phase::Running {
        return;
    }
    state.phase = Phase::Ready;
    state.move_timer.stop();
    if state.score > state.high_score {
        state.high_score = state.score;
    }
}

/// Turn the snake. A 180° reversal is a silent no-op, as is steering
/// while not running.
pub fn set_direction(state: &mut SnakeState, dir: Direction) {
    if state.phase != Phase::Running {
        return;
    }
    if dir == state.dir.opposite() {
        return;
    }
    state.dir = dir;
}

/// Sample food positions until one lands off the body.
///
/// The body can never fill the grid (game over fires first), so this
/// terminates.
pub fn spawn_food(state: &mut SnakeState) {
    loop {
        let candidate = Pos::new(
            state.rng.range(GRID_SIZE as u32) as i32,
            state.rng.range(GRID_SIZE as u32) as i32,
        );
        if !state.snake.contains(&candidate) {
            state.food = candidate;
            return;
        }
    }
}

/// Advance the snake one cell.
pub fn step(state: &mut SnakeState) {
    if state.phase != Phase::Running {
        return;
    }

    let (dx, dy) = state.dir.delta();
    let head = state.snake[0];
    let new_head = Pos::new(head.x + dx, head.y + dy);

    // Wall or self collision ends the run. The tail cell still counts as
    // occupied this step, matching the classic rule.
    if !new_head.in_grid() || state.snake.contains(&new_head) {
        state.phase = Phase::GameOver;
        state.move_timer.stop();
        return;
    }

    state.snake.insert(0, new_head);

    if new_head == state.food {
        state.score += FOOD_SCORE;
        spawn_food(state);
    } else {
        state.snake.pop();
    }
}

pub fn tick(state: &mut SnakeState, delta_ticks: u32) {
    let fires = state.move_timer.advance(delta_ticks);
    for _ in 0..fires {
        step(state);
        if state.phase != Phase::Running {
            break;
        }
    }
}

pub fn stars_for(score: u32) -> u8 {
    if score >= 100 {
        5
    } else if score >= 80 {
        4
    } else if score >= 60 {
        3
    } else if score >= 40 {
        2
    } else {
        1
    }
}

/// End the session with the best score seen. Idempotent.
pub fn finish(state: &mut SnakeState) {
    if state.finished {
        return;
    }
    pause(state);
    state.finished = true;
    let final_score = state.score.max(state.high_score);
    state.result = Some(GameResult {
        score: final_score,
        stars: stars_for(final_score),
    });
}
