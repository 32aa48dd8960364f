//! Fixed-timestep game clock using an accumulator pattern.
//!
//! `draw_web()` calls at ~60fps with variable delta. GameTime converts
//! this into a fixed number of discrete ticks per second, making game
//! logic deterministic and fully testable. All engine timers count in
//! ticks and only advance through `Game::tick(delta_ticks)`, so an
//! unmounted game can never receive a late timer callback.

/// Ticks per real-time second for all games.
///
/// 20 ticks/sec keeps every interval used by the engines integral:
/// snake moves every 3 ticks (150ms), the tic-tac-toe AI thinks for
/// 10 ticks (500ms), memory resolves a pair after 20 ticks (1s).
pub const TICKS_PER_SEC: u32 = 20;

pub struct GameTime {
    /// Milliseconds per tick (50ms at 20 ticks/sec)
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl GameTime {
    /// Create a new GameTime with the given tick rate.
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the number of discrete ticks to process this frame.
    ///
    /// Call this once per draw frame. The returned tick count should be
    /// passed to `Game::tick(delta_ticks)`.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => {
                let d = now_ms - prev;
                // Clamp to avoid spiral-of-death if tab was backgrounded
                d.clamp(0.0, 500.0)
            }
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

/// A suspendable countdown driven by game ticks.
///
/// Replaces ad-hoc `u32` countdown fields: one-shot timers fire once
/// and stop; repeating timers re-arm themselves and can fire several
/// times in one `advance` call if the tab lagged. A stopped timer never
/// fires, and `stop` is idempotent.
#[derive(Clone, Debug, PartialEq)]
pub struct TickTimer {
    interval: u32,
    remaining: u32,
    running: bool,
    repeating: bool,
}

impl TickTimer {
    /// Create a stopped one-shot timer. Call [`start`](TickTimer::start) to arm it.
    pub fn one_shot(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            remaining: 0,
            running: false,
            repeating: false,
        }
    }

    /// Create a stopped repeating timer.
    pub fn repeating(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            remaining: 0,
            running: false,
            repeating: true,
        }
    }

    /// Arm (or re-arm) the timer with a full interval.
    pub fn start(&mut self) {
        self.remaining = self.interval;
        self.running = true;
    }

    /// Disarm the timer. Safe to call on an already-stopped timer.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks left until the next fire (0 when stopped).
    pub fn remaining(&self) -> u32 {
        if self.running {
            self.remaining
        } else {
            0
        }
    }

    /// Advance by `delta_ticks`, returning how many times the timer fired.
    /// One-shot timers fire at most once and stop themselves.
    pub fn advance(&mut self, delta_ticks: u32) -> u32 {
        if !self.running || delta_ticks == 0 {
            return 0;
        }

        let mut fires = 0;
        let mut left = delta_ticks;
        while left >= self.remaining {
            left -= self.remaining;
            fires += 1;
            if !self.repeating {
                self.running = false;
                return fires;
            }
            self.remaining = self.interval;
        }
        self.remaining -= left;
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── GameTime ───────────────────────────────────────────────

    #[test]
    fn first_frame_returns_zero_ticks() {
        let mut gt = GameTime::new(TICKS_PER_SEC);
        assert_eq!(gt.update(0.0), 0);
    }

    #[test]
    fn one_tick_at_50ms() {
        let mut gt = GameTime::new(TICKS_PER_SEC); // 50ms per tick
        gt.update(0.0); // first frame
        assert_eq!(gt.update(50.0), 1);
        assert_eq!(gt.total_ticks, 1);
    }

    #[test]
    fn multiple_ticks_accumulated() {
        let mut gt = GameTime::new(TICKS_PER_SEC);
        gt.update(0.0);
        assert_eq!(gt.update(175.0), 3); // 175ms = 3 ticks + 25ms remainder
        assert_eq!(gt.total_ticks, 3);
    }

    #[test]
    fn remainder_carried_over() {
        let mut gt = GameTime::new(TICKS_PER_SEC);
        gt.update(0.0);
        gt.update(75.0); // 1 tick, 25ms remainder
        assert_eq!(gt.total_ticks, 1);
        // 25ms carried + 25ms delta = 50ms = 1 tick
        assert_eq!(gt.update(100.0), 1);
        assert_eq!(gt.total_ticks, 2);
    }

    #[test]
    fn clamp_large_delta() {
        let mut gt = GameTime::new(TICKS_PER_SEC);
        gt.update(0.0);
        // 10 second gap (tab backgrounded) → clamped to 500ms = 10 ticks
        assert_eq!(gt.update(10000.0), 10);
    }

    #[test]
    fn sub_tick_frames_accumulate() {
        let mut gt = GameTime::new(TICKS_PER_SEC); // 50ms/tick
        gt.update(0.0);
        assert_eq!(gt.update(16.0), 0);
        assert_eq!(gt.update(32.0), 0);
        assert_eq!(gt.update(48.0), 0);
        assert_eq!(gt.update(64.0), 1); // crosses 50ms
        assert_eq!(gt.total_ticks, 1);
    }

    #[test]
    fn steady_60fps() {
        let mut gt = GameTime::new(TICKS_PER_SEC);
        gt.update(0.0);
        let mut total = 0u32;
        // 60 frames at ~16.67ms each = 1 second
        for i in 1..=60 {
            total += gt.update(i as f64 * 16.667);
        }
        // Should be approximately 20 ticks (1 second at 20 ticks/sec)
        assert!(total >= 19 && total <= 21, "expected ~20 ticks, got {}", total);
    }

    // ── TickTimer ──────────────────────────────────────────────

    #[test]
    fn one_shot_fires_once_then_stops() {
        let mut t = TickTimer::one_shot(10);
        t.start();
        assert_eq!(t.advance(9), 0);
        assert_eq!(t.advance(1), 1);
        assert!(!t.is_running());
        assert_eq!(t.advance(100), 0);
    }

    #[test]
    fn unstarted_timer_never_fires() {
        let mut t = TickTimer::one_shot(5);
        assert_eq!(t.advance(1000), 0);
        let mut r = TickTimer::repeating(5);
        assert_eq!(r.advance(1000), 0);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut t = TickTimer::repeating(3);
        t.start();
        t.stop();
        t.stop();
        assert!(!t.is_running());
        assert_eq!(t.advance(30), 0);
    }

    #[test]
    fn repeating_fires_every_interval() {
        let mut t = TickTimer::repeating(3);
        t.start();
        assert_eq!(t.advance(2), 0);
        assert_eq!(t.advance(1), 1);
        assert_eq!(t.advance(3), 1);
        assert!(t.is_running());
    }

    #[test]
    fn repeating_catches_up_after_lag() {
        let mut t = TickTimer::repeating(3);
        t.start();
        // 10 ticks at once: fires at 3, 6, 9 with 2 ticks toward the next
        assert_eq!(t.advance(10), 3);
        assert_eq!(t.remaining(), 2);
    }

    #[test]
    fn restart_rearms_full_interval() {
        let mut t = TickTimer::one_shot(10);
        t.start();
        t.advance(7);
        t.start(); // re-arm
        assert_eq!(t.advance(9), 0);
        assert_eq!(t.advance(1), 1);
    }

    #[test]
    fn zero_delta_is_noop() {
        let mut t = TickTimer::repeating(1);
        t.start();
        assert_eq!(t.advance(0), 0);
        assert!(t.is_running());
    }

    #[test]
    fn remaining_reports_zero_when_stopped() {
        let mut t = TickTimer::one_shot(8);
        assert_eq!(t.remaining(), 0);
        t.start();
        assert_eq!(t.remaining(), 8);
        t.stop();
        assert_eq!(t.remaining(), 0);
    }
}
