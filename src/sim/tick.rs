//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one discrete step.

use super::collision::out_of_bounds;
use super::state::{GameEvent, GamePhase, GameState};

/// Distance the autopilot keeps between the bird's bottom edge and the gap bottom
const AUTOPILOT_CLEARANCE: f32 = 10.0;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump while playing, restart after game over (key/click/tap)
    pub activate: bool,
    /// Restart; only honored after game over
    pub reset: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
///
/// `now_ms` is the clock reading used for spawn timing. Returns what happened
/// during the tick, in order.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        if input.activate || input.reset {
            state.reset();
            events.push(GameEvent::Reset);
        }
        return events;
    }

    let activate = input.activate || (input.autopilot && autopilot_wants_jump(state));
    if activate {
        state.bird.jump(state.tuning.jump_strength);
        events.push(GameEvent::Jumped);
    }

    state.time_ticks += 1;

    // Physics before any checks
    state.bird.apply_gravity(state.tuning.gravity);

    let due = match state.last_spawn_ms {
        None => true,
        Some(last) => now_ms - last >= state.tuning.spawn_interval_ms,
    };
    if due {
        let id = state.spawn_pipe(now_ms);
        events.push(GameEvent::PipeSpawned { id });
    }

    let bird = state.bird.bounds();
    let speed = state.tuning.pipe_speed;
    let mut crashed = false;

    // Every pipe advances and is checked, even after a hit
    for pipe in &mut state.pipes {
        pipe.advance(speed);

        if !pipe.passed && pipe.right() < bird.left() {
            pipe.passed = true;
            state.score += 1;
            log::debug!("Passed pipe {} (score {})", pipe.id, state.score);
            events.push(GameEvent::Passed {
                id: pipe.id,
                score: state.score,
            });
        }

        if pipe.collides_with(&bird) {
            crashed = true;
            events.push(GameEvent::Collided { id: pipe.id });
        }
    }

    state.pipes.retain(|p| !p.is_offscreen());

    if out_of_bounds(&bird, state.tuning.screen_height) {
        crashed = true;
        events.push(GameEvent::OutOfBounds);
    }

    if crashed {
        state.end_run();
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}

/// Decide whether the autopilot should jump this tick
///
/// Targets the first pipe not yet passed and keeps the bird's bottom edge
/// just above that pipe's gap bottom, looking one tick ahead. With no pipe in
/// view it holds slightly below mid-screen.
fn autopilot_wants_jump(state: &GameState) -> bool {
    let tuning = &state.tuning;
    let aim = match state.pipes.iter().find(|p| !p.passed) {
        Some(pipe) => pipe.gap_bottom() - AUTOPILOT_CLEARANCE,
        None => (tuning.screen_height + tuning.pipe_gap) / 2.0 - AUTOPILOT_CLEARANCE,
    };

    let bird = &state.bird;
    let next_bottom = bird.pos.y + bird.size.y + bird.vel + tuning.gravity;
    next_bottom > aim
}
