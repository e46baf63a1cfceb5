//! WASM exports for Football Challenge.
//!
//! The JS side calls `game_init()` once, forwards pointer and button events as
//! they happen, calls `game_tick(dt)` every animation frame, and then reads the
//! state frame and the frame's events through `Float32Array` views over wasm memory.

pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use football_core::{ChallengeConfig, FootballChallenge, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner<FootballChallenge>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner<FootballChallenge>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                // The logger is installed by game_init, so go straight to the console.
                web_sys::console::warn_1(&"football-challenge: call game_init() first".into());
                None
            }
        }
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = ChallengeConfig {
        seed: Some(js_sys::Date::now() as u64),
        ..ChallengeConfig::default()
    };
    let mut runner = GameRunner::new(FootballChallenge::with_config(config));
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("football-challenge: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_field_rect(left: f32, top: f32, width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::FieldRect { left, top, width, height }));
}

#[wasm_bindgen]
pub fn game_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_leave() {
    with_runner(|r| r.push_input(InputEvent::PointerLeave));
}

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

/// Apply a JSON config. Returns false (and logs why) if it was rejected.
#[wasm_bindgen]
pub fn game_configure(json: &str) -> bool {
    with_runner(|r| match r.configure(json) {
        Ok(()) => true,
        Err(err) => {
            log::error!("football-challenge: config rejected: {}", err);
            false
        }
    })
    .unwrap_or(false)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_state_ptr() -> *const f32 {
    with_runner(|r| r.state_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_state_len() -> u32 {
    with_runner(|r| r.state_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_state_json() -> String {
    with_runner(|r| r.state_json()).unwrap_or_default()
}
