//! Gapfall headless entry point
//!
//! Runs an autopilot session on a simulated 60 Hz clock and prints the final
//! frame as JSON. Rendering hosts embed `FrameDriver` directly instead.
//!
//! Environment:
//! - `GAPFALL_PRESET`: tuning preset name (classic, floaty, brisk)
//! - `GAPFALL_TUNING`: path to a JSON tuning file (overrides the preset)
//! - `GAPFALL_SEED`: RNG seed
//! - `RUST_LOG`: log filter

use gapfall::platform::ManualClock;
use gapfall::sim::GameEvent;
use gapfall::{FrameDriver, Tuning, TuningPreset};

/// Simulated session length
const SESSION_FRAMES: u32 = 60 * 60;

fn load_tuning() -> Tuning {
    let preset = std::env::var("GAPFALL_PRESET")
        .ok()
        .and_then(|name| {
            let preset = TuningPreset::from_str(&name);
            if preset.is_none() {
                log::warn!("Unknown preset {:?}, using Classic", name);
            }
            preset
        })
        .unwrap_or_default();

    let Ok(path) = std::env::var("GAPFALL_TUNING") else {
        return Tuning::from_preset(preset);
    };

    match std::fs::read_to_string(&path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Bad tuning file {}: {}", path, e);
                Tuning::from_preset(preset)
            }
        },
        Err(e) => {
            log::warn!("Cannot read tuning file {}: {}", path, e);
            Tuning::from_preset(preset)
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Gapfall (headless) starting...");

    let tuning = load_tuning();
    let seed = std::env::var("GAPFALL_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5eed);
    let frame_ms = tuning.tick_ms;

    let clock = ManualClock::new(0.0);
    let mut driver = FrameDriver::with_tuning(tuning, seed, &clock);
    driver.set_autopilot(true);
    log::info!("Game initialized with seed: {}", seed);

    let mut runs = 1u32;
    for _ in 0..SESSION_FRAMES {
        clock.advance(frame_ms);
        let report = driver.frame();

        for event in &report.events {
            if let GameEvent::GameOver { score } = event {
                log::info!("Run {} ended with score {}", runs, score);
                runs += 1;
                driver.activate();
            }
        }
    }

    let snapshot = driver.snapshot();
    log::info!(
        "Session over after {} run(s): score {}, best {}",
        runs,
        snapshot.score,
        snapshot.best_score
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
