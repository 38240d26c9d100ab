//! Fixed-timestep frame driver
//!
//! Owns one simulation and feeds it whole ticks from a time accumulator, so
//! the simulation rate is independent of how often the host calls `frame()`.

use crate::platform::{Action, Clock};
use crate::settings::Tuning;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::snapshot::RenderSnapshot;

/// What one `frame()` call did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Simulation ticks executed this frame
    pub ticks: u32,
    /// Events from all ticks, in order
    pub events: Vec<GameEvent>,
}

/// Game instance: simulation, clock and pending input
pub struct FrameDriver<C: Clock> {
    state: GameState,
    clock: C,
    /// Unsimulated time carried between frames (ms)
    accumulator: f64,
    last_time: Option<f64>,
    input: TickInput,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(state: GameState, clock: C) -> Self {
        Self {
            state,
            clock,
            accumulator: 0.0,
            last_time: None,
            input: TickInput::default(),
        }
    }

    /// Convenience constructor from tuning and seed
    pub fn with_tuning(tuning: Tuning, seed: u64, clock: C) -> Self {
        Self::new(GameState::new(tuning, seed), clock)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Unsimulated time carried into the next frame
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    /// Queue a jump (or a restart after game over) for the next tick
    pub fn activate(&mut self) {
        self.input.activate = true;
    }

    /// Queue a restart for the next tick (ignored unless game over)
    pub fn request_reset(&mut self) {
        self.input.reset = true;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.input.autopilot != enabled {
            log::info!("Autopilot: {}", enabled);
        }
        self.input.autopilot = enabled;
    }

    /// Route a host action; Reset only counts after game over
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Activate => self.activate(),
            Action::Reset if self.state.is_game_over() => self.request_reset(),
            Action::Reset => {}
        }
    }

    /// Replace the simulation with a fresh one (new seed, same tuning)
    pub fn restart(&mut self, seed: u64) {
        let best = self.state.best_score;
        self.state = GameState::new(self.state.tuning.clone(), seed);
        self.state.best_score = best;
        self.accumulator = 0.0;
        self.clear_one_shot_input();
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Run all ticks due since the previous frame
    pub fn frame(&mut self) -> FrameReport {
        let now = self.clock.now_ms();
        let mut report = FrameReport::default();

        let Some(last) = self.last_time.replace(now) else {
            // First frame only establishes the time base
            return report;
        };

        let tick_ms = self.state.tuning.tick_ms;
        let max_substeps = self.state.tuning.max_substeps;
        // min/max rather than clamp: a NaN bound must not panic
        let elapsed = (now - last).max(0.0).min(self.state.tuning.max_frame_ms);
        self.accumulator += elapsed;

        while self.accumulator >= tick_ms && report.ticks < max_substeps {
            let events = tick(&mut self.state, &self.input, now);
            report.events.extend(events);
            self.accumulator -= tick_ms;
            report.ticks += 1;

            // Clear one-shot inputs after processing
            self.clear_one_shot_input();
        }

        // Behind by more than the substep cap: drop whole ticks, keep the remainder
        if self.accumulator >= tick_ms {
            log::debug!(
                "Dropping {} ticks after substep cap",
                (self.accumulator / tick_ms).floor()
            );
            self.accumulator %= tick_ms;
        }

        report
    }

    fn clear_one_shot_input(&mut self) {
        self.input.activate = false;
        self.input.reset = false;
    }
}
