//! Platform abstraction layer
//!
//! The windowing backend supplies two things each frame: key state and a
//! clock. Both are traits so the game loop can run against a real window or
//! headless.

use std::collections::HashSet;

use crate::audio::{AudioSink, play_events};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{GameState, TickInput, tick};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Enter
    Restart,
    /// Escape / window close
    Quit,
}

/// Keyboard queries
pub trait InputSource {
    /// Key is held this frame
    fn is_down(&self, key: Key) -> bool;
    /// Key went down this frame
    fn is_pressed(&self, key: Key) -> bool;
}

/// Frame timing
pub trait Clock {
    /// Seconds since the previous frame
    fn delta(&self) -> f32;
    /// Seconds since start
    fn time(&self) -> f64;
}

/// Build the simulation input for this frame
///
/// Movement uses held keys; restart only fires on the frame it is pressed.
pub fn read_input(source: &impl InputSource) -> TickInput {
    TickInput {
        up: source.is_down(Key::Up),
        down: source.is_down(Key::Down),
        left: source.is_down(Key::Left),
        right: source.is_down(Key::Right),
        restart: source.is_pressed(Key::Restart),
        idle_mode: false,
    }
}

/// Whether the player asked to leave this frame
pub fn quit_requested(source: &impl InputSource) -> bool {
    source.is_pressed(Key::Quit)
}

/// One frame of the game loop: input, simulation, audio, then drawing
///
/// With `idle_mode` the autopilot drives the player. Returns false once quit
/// was pressed; that frame is not simulated.
pub fn run_frame(
    state: &mut GameState,
    keys: &impl InputSource,
    clock: &impl Clock,
    idle_mode: bool,
    renderer: &mut impl Renderer,
    audio: &mut impl AudioSink,
) -> bool {
    if quit_requested(keys) {
        log::info!("Quit requested");
        return false;
    }

    let input = TickInput {
        idle_mode,
        ..read_input(keys)
    };
    tick(state, &input, clock.delta());
    play_events(&state.events, audio);
    draw_frame(state, clock.time(), renderer);
    true
}

/// Held keys with edge detection, fed by whatever event loop owns the window
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    down: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.down.remove(&key);
    }

    /// Forget this frame's presses; call after the frame's input was read
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for KeyState {
    fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Clock advancing by a constant step per frame
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f32,
    time: f64,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step, time: 0.0 }
    }

    pub fn advance(&mut self) {
        self.time += self.step as f64;
    }
}

impl Clock for FixedClock {
    fn delta(&self) -> f32 {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }
}
