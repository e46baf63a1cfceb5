// extensions/mod.rs
//
// Presentation helpers that sit beside the game logic. The state machine never
// reads them; they only shape what the renderer shows between state changes.

pub mod easing;
pub mod tween;

pub use easing::{Easing, lerp_vec2, ease_vec2};
pub use tween::Tween;
