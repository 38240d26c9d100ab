//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, gap_collision};
use crate::settings::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for reset
    GameOver,
}

/// Something that happened during a tick (for renderers, HUD, sound hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    PipeSpawned { id: u32 },
    Passed { id: u32, score: u32 },
    Collided { id: u32 },
    OutOfBounds,
    GameOver { score: u32 },
    Reset,
}

/// The falling player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    /// Vertical velocity, px/tick (positive = down)
    pub vel: f32,
    pub size: Vec2,
}

impl Bird {
    /// Bird at the vertical center of the screen, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.screen_height / 2.0),
            vel: 0.0,
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
        }
    }

    /// Integrate one tick of gravity (velocity first, then position)
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    /// Overwrite velocity with the jump impulse
    pub fn jump(&mut self, strength: f32) {
        self.vel = strength;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A scrolling obstacle with a gap window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Top edge of the gap window
    pub gap_top: f32,
    /// Height of the gap window (fixed for the pipe's lifetime)
    pub gap_size: f32,
    /// Bird has cleared this pipe
    pub passed: bool,
}

impl Pipe {
    /// Spawn a pipe at the right screen edge with a random gap
    pub fn spawn(id: u32, tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let (lo, hi) = tuning.gap_top_range();
        let gap_top = if hi > lo { rng.random_range(lo..hi) } else { lo };
        Self {
            id,
            x: tuning.screen_width,
            width: tuning.pipe_width,
            gap_top,
            gap_size: tuning.pipe_gap,
            passed: false,
        }
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_size
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Scroll left by one tick
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn collides_with(&self, bird: &Rect) -> bool {
        gap_collision(bird, self.x, self.width, self.gap_top, self.gap_bottom())
    }

    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    /// Solid rectangle above the gap
    pub fn top_solid(&self) -> Rect {
        Rect::new(Vec2::new(self.x, 0.0), Vec2::new(self.width, self.gap_top))
    }

    /// Solid rectangle below the gap, down to the screen bottom
    pub fn bottom_solid(&self, screen_height: f32) -> Rect {
        let bottom = self.gap_bottom();
        Rect::new(
            Vec2::new(self.x, bottom),
            Vec2::new(self.width, (screen_height - bottom).max(0.0)),
        )
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    /// Pipes cleared this run
    pub score: u32,
    /// Best score across runs of this instance (in memory only)
    pub best_score: u32,
    /// Ticks since the last reset
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Clock time of the most recent spawn, None until the first pipe
    pub last_spawn_ms: Option<f64>,
    pub bird: Bird,
    /// Live pipes in creation order
    pub pipes: Vec<Pipe>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game in the Playing phase
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            bird: Bird::new(&tuning),
            tuning,
            score: 0,
            best_score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            last_spawn_ms: None,
            pipes: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a pipe at the right edge and record the spawn time
    pub fn spawn_pipe(&mut self, now_ms: f64) -> u32 {
        let id = self.next_entity_id();
        let pipe = Pipe::spawn(id, &self.tuning, &mut self.rng);
        log::debug!("Spawned pipe {} with gap at {:.1}", id, pipe.gap_top);
        self.pipes.push(pipe);
        self.last_spawn_ms = Some(now_ms);
        id
    }

    /// Move to GameOver, recording the best score
    pub fn end_run(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        log::info!("Game over: score {} (best {})", self.score, self.best_score);
    }

    /// Back to a fresh run; the RNG stream continues
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.tuning);
        self.pipes.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.last_spawn_ms = None;
        self.phase = GamePhase::Playing;
        log::info!("Game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bird_starts_centered() {
        let tuning = Tuning::default();
        let bird = Bird::new(&tuning);
        assert_eq!(bird.pos, Vec2::new(50.0, 300.0));
        assert_eq!(bird.vel, 0.0);
    }

    #[test]
    fn test_gravity_integrates_velocity_first() {
        let mut bird = Bird::new(&Tuning::default());
        bird.apply_gravity(0.5);
        assert_eq!(bird.vel, 0.5);
        assert_eq!(bird.pos.y, 300.5);
        bird.apply_gravity(0.5);
        assert_eq!(bird.vel, 1.0);
        assert_eq!(bird.pos.y, 301.5);
    }

    #[test]
    fn test_jump_overwrites() {
        let mut bird = Bird::new(&Tuning::default());
        bird.vel = 14.0;
        bird.jump(-9.0);
        assert_eq!(bird.vel, -9.0);
        bird.vel = -20.0;
        bird.jump(-9.0);
        assert_eq!(bird.vel, -9.0);
    }

    #[test]
    fn test_pipe_spawn_geometry() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..200 {
            let pipe = Pipe::spawn(id, &tuning, &mut rng);
            assert_eq!(pipe.x, tuning.screen_width);
            assert!(!pipe.passed);
            assert!(pipe.gap_top >= 50.0 && pipe.gap_top < 400.0);
            assert_eq!(pipe.gap_size, tuning.pipe_gap);
            assert!((pipe.gap_bottom() - pipe.gap_top - tuning.pipe_gap).abs() < 1e-3);
        }
    }

    #[test]
    fn test_pipe_offscreen() {
        let mut pipe = Pipe {
            id: 1,
            x: 0.0,
            width: 80.0,
            gap_top: 100.0,
            gap_size: 150.0,
            passed: false,
        };
        pipe.x = -80.0;
        assert!(!pipe.is_offscreen());
        pipe.advance(0.5);
        assert!(pipe.is_offscreen());
    }

    #[test]
    fn test_pipe_solids_frame_the_gap() {
        let pipe = Pipe {
            id: 1,
            x: 40.0,
            width: 80.0,
            gap_top: 80.0,
            gap_size: 150.0,
            passed: false,
        };
        let top = pipe.top_solid();
        let bottom = pipe.bottom_solid(600.0);
        assert_eq!(top.bottom(), 80.0);
        assert_eq!(bottom.top(), 230.0);
        assert_eq!(bottom.bottom(), 600.0);

        // Bird fully inside gap touches neither solid
        let bird = Rect::new(Vec2::new(50.0, 100.0), Vec2::new(34.0, 24.0));
        assert!(!pipe.collides_with(&bird));
        assert!(!bird.intersects(&top) && !bird.intersects(&bottom));
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let mut a = GameState::new(Tuning::default(), 42);
        let mut b = GameState::new(Tuning::default(), 42);
        for i in 0..10 {
            a.spawn_pipe(i as f64);
            b.spawn_pipe(i as f64);
        }
        assert_eq!(a.pipes, b.pipes);
    }

    #[test]
    fn test_end_run_tracks_best() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.score = 5;
        state.end_run();
        assert!(state.is_game_over());
        assert_eq!(state.best_score, 5);

        state.reset();
        state.score = 3;
        state.end_run();
        assert_eq!(state.best_score, 5);
    }

    #[test]
    fn test_reset_mid_run() {
        let mut state = GameState::new(Tuning::default(), 9);
        let fresh = Bird::new(&state.tuning);
        state.spawn_pipe(0.0);
        state.spawn_pipe(1500.0);
        state.score = 4;
        state.best_score = 6;
        state.time_ticks = 321;
        state.bird.pos.y = 42.0;
        state.bird.vel = 7.5;
        assert_eq!(state.phase, GamePhase::Playing);

        state.reset();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bird, fresh);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.last_spawn_ms, None);
        assert_eq!(state.best_score, 6);
    }
}
