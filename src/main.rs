//! Ring Breaker entry point
//!
//! Headless native host: drives one session with the demo autopilot,
//! building a frame each step the way a windowed renderer would, and logs
//! the outcome.
//!
//! Usage: `ring-breaker [settings.json]`

use std::path::Path;

use ring_breaker::autopilot::Autopilot;
use ring_breaker::renderer::build_frame;
use ring_breaker::sim::{GameState, Impact, Step, TickInput, tick};
use ring_breaker::{InputMapper, Settings};

fn main() {
    env_logger::init();
    log::info!("Ring Breaker (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    log::debug!("Settings: {}", settings.to_json());

    let mut state = GameState::with_settings(&settings);
    let mut mapper = InputMapper::new();
    let mut pilot = Autopilot::new(settings.autopilot_seed);
    let window = settings.viewport;

    let mut outcome = Step::Continue;
    let mut frames = 0;
    while frames < settings.max_frames {
        let event = pilot.next_event(&state, window);
        mapper.handle_event(&event, window);

        let input = TickInput {
            rotation: mapper.rotation(),
        };
        outcome = tick(&mut state, &input, settings.frame_dt);
        frames += 1;

        if let Some(Impact::Brick { ring, slot, .. }) = state.last_frame.impact {
            log::debug!(
                "Frame {}: brick ({}, {}) down, {} left",
                frames,
                ring,
                slot,
                state.board.remaining()
            );
        }

        let frame = build_frame(&state, window);
        log::trace!("Frame {}: {} triangles", frames, frame.triangle_count());

        if matches!(outcome, Step::Won | Step::Lost) {
            break;
        }
    }

    match outcome {
        Step::Won => println!("You win! ({} frames, {:.1}s)", frames, state.time),
        Step::Lost => println!("You lose! ({} frames, {:.1}s)", frames, state.time),
        _ => println!(
            "Stopped after {} frames: {} bricks left, {} lives",
            frames,
            state.board.remaining(),
            state.lives
        ),
    }
}
