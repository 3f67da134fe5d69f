//! Dodge Pong headless runner
//!
//! Plays the game on autopilot at a fixed 60 Hz, pushing every frame through
//! the renderer and audio boundaries, then logs a summary.
//!
//! Usage: `dodge-pong [seed] [seconds] [tuning.json]`

use dodge_pong::audio::LogAudio;
use dodge_pong::consts::FRAME_DT;
use dodge_pong::platform::{FixedClock, KeyState, run_frame};
use dodge_pong::renderer::CommandList;
use dodge_pong::sim::{GameEvent, GameState};
use dodge_pong::{Tuning, TuningError};

const DEFAULT_SEED: u64 = 12345;
const DEFAULT_SECONDS: f32 = 60.0;

struct Args {
    seed: u64,
    seconds: f32,
    tuning: Option<String>,
}

fn parse_args() -> Args {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_SEED);
    let seconds = args
        .next()
        .and_then(|s| s.parse().ok())
        .filter(|s: &f32| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_SECONDS);
    Args {
        seed,
        seconds,
        tuning: args.next(),
    }
}

fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match Tuning::load(path) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        Err(err @ TuningError::Io(_)) | Err(err @ TuningError::Parse(_)) => {
            log::error!("Could not read {path}: {err}; using defaults");
            Tuning::default()
        }
        Err(err) => {
            log::error!("Rejected tuning in {path}: {err}; using defaults");
            Tuning::default()
        }
    }
}

fn run(args: &Args) {
    let tuning = load_tuning(args.tuning.as_deref());
    let mut state = GameState::with_tuning(args.seed, tuning);
    let mut clock = FixedClock::new(FRAME_DT);
    let mut commands = CommandList::new();
    let mut audio = LogAudio::default();
    // Nobody at the keyboard; the autopilot plays
    let keys = KeyState::new();
    let frames = (args.seconds / FRAME_DT).round() as u64;
    let mut collected_total = 0u32;
    let mut peak_balls = state.balls.len();

    log::info!(
        "Dodge Pong headless: seed {}, {} frames ({}s)",
        args.seed,
        frames,
        args.seconds
    );

    for _ in 0..frames {
        clock.advance();
        if !run_frame(&mut state, &keys, &clock, true, &mut commands, &mut audio) {
            break;
        }

        for event in &state.events {
            match event {
                GameEvent::ObjectiveCollected { .. } => collected_total += 1,
                GameEvent::NewHighScore { score } => log::debug!("New high score: {score}"),
                _ => {}
            }
        }
        peak_balls = peak_balls.max(state.balls.len());
    }

    log::info!(
        "Done: {} frames rendered, {} game over(s), {} objectives collected, high score {}, peak balls {}, {} sounds",
        commands.frames(),
        state.game_overs,
        collected_total,
        state.score.high_score,
        peak_balls,
        audio.played
    );
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    run(&args);
}
