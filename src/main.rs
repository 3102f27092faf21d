//! Gridfire entry point
//!
//! Headless demo driver: stands in for the render/input pump by running the
//! simulation on a fixed 60 Hz logical clock with a scripted autopilot, and
//! logs the round as it unfolds.

use gridfire::sim::{FrameInput, GameState, Outcome, PointerEvent, tick};

/// Logical frame rate of the demo driver
const FRAME_RATE: f64 = 60.0;
/// Fire roughly four times per second
const FIRE_INTERVAL: u64 = 15;

/// Track the lowest enemy's column and fire periodically
fn autopilot(state: &GameState, frame: u64) -> FrameInput {
    let mut input = FrameInput::default();

    let target = state
        .entities()
        .filter(|e| e.kind.is_enemy())
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.pos.x + e.size.x / 2.0);

    if let Some(x) = target {
        input.events.push(PointerEvent::Move { x });
    }
    if frame % FIRE_INTERVAL == 0 {
        input.events.push(PointerEvent::Press);
    }
    input
}

fn main() {
    env_logger::init();

    let mut state = GameState::new();
    let mut frame: u64 = 0;

    while state.outcome == Outcome::InProgress {
        let now = frame as f64 / FRAME_RATE;
        let input = autopilot(&state, frame);
        tick(&mut state, &input, now);
        frame += 1;
    }

    let seconds = frame as f64 / FRAME_RATE;
    println!(
        "{:?} - score {} after {frame} frames ({seconds:.1}s)",
        state.outcome, state.score
    );
}
