//! Wire layout shared with the TypeScript side (`protocol.ts`).
//!
//! Two flat `f32` regions are exposed to JS as `Float32Array` views:
//! ```text
//! [State frame: STATE_FLOATS floats, rewritten every frame]
//! [Events: max_events × EVENT_FLOATS floats, cleared every frame]
//! ```
//!
//! Booleans are 0.0 / 1.0. Role is 0.0 (striker) / 1.0 (goalkeeper).
//! Phase is 0.0 (idle) / 1.0 (travelling) / 2.0 (result shown).

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::challenge::machine::Phase;
use crate::challenge::state::GameState;

/// Protocol version written into every frame.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Floats in the state frame.
pub const STATE_FLOATS: usize = 17;

/// State frame field indices.
pub const STATE_VERSION: usize = 0;
pub const STATE_SCORE: usize = 1;
pub const STATE_ROLE: usize = 2;
pub const STATE_BALL_X: usize = 3;
pub const STATE_BALL_Y: usize = 4;
pub const STATE_DISPLAY_X: usize = 5;
pub const STATE_DISPLAY_Y: usize = 6;
pub const STATE_TARGET_X: usize = 7;
pub const STATE_TARGET_Y: usize = 8;
pub const STATE_BLOCKED: usize = 9;
pub const STATE_ANIMATING: usize = 10;
pub const STATE_AI_ASSIST: usize = 11;
pub const STATE_AIM_GUIDE: usize = 12;
pub const STATE_LAST_POINTS: usize = 13;
pub const STATE_KICK: usize = 14;
pub const STATE_ELAPSED: usize = 15;
pub const STATE_PHASE: usize = 16;

/// Game event kinds (Rust → JS).
pub mod events {
    /// a = target x, b = target y, c = kick id
    pub const KICK: f32 = 1.0;
    /// a = points, b = score, c = 1.0 if blocked
    pub const SHOT_RESOLVED: f32 = 2.0;
    /// a = kick id
    pub const SHOT_RESET: f32 = 3.0;
    pub const BLOCKED: f32 = 4.0;
    /// a = role
    pub const ROLE_CHANGED: f32 = 5.0;
    /// a = 1.0 when enabled
    pub const AI_TOGGLED: f32 = 6.0;
    pub const RESTARTED: f32 = 7.0;
}

/// Custom event kinds (JS buttons → Rust).
pub mod custom {
    pub const BLOCK: u32 = 1;
    pub const SWITCH_ROLE: u32 = 2;
    pub const TOGGLE_AI: u32 = 3;
    pub const NEW_GAME: u32 = 4;
}

/// The state frame. Field order matches the `STATE_*` indices.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StateFrame {
    pub version: f32,
    pub score: f32,
    pub role: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    /// Ball position as it should be drawn this frame (tweened).
    pub display_x: f32,
    pub display_y: f32,
    pub target_x: f32,
    pub target_y: f32,
    pub blocked: f32,
    pub animating: f32,
    pub ai_assist: f32,
    pub aim_guide: f32,
    pub last_points: f32,
    pub kick: f32,
    pub elapsed: f32,
    pub phase: f32,
}

#[inline]
fn flag(b: bool) -> f32 {
    if b { 1.0 } else { 0.0 }
}

impl StateFrame {
    pub fn write(&mut self, state: &GameState, phase: Phase, display: Vec2, kick: u32, elapsed: f64) {
        *self = Self {
            version: PROTOCOL_VERSION,
            score: state.score as f32,
            role: state.role.as_f32(),
            ball_x: state.ball_position.x,
            ball_y: state.ball_position.y,
            display_x: display.x,
            display_y: display.y,
            target_x: state.target_position.x,
            target_y: state.target_position.y,
            blocked: flag(state.is_blocked),
            animating: flag(state.is_animating),
            ai_assist: flag(state.ai_assist_enabled),
            aim_guide: flag(state.show_aim_guide),
            last_points: state.last_points_awarded as f32,
            kick: kick as f32,
            elapsed: elapsed as f32,
            phase: phase.as_f32(),
        };
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}
