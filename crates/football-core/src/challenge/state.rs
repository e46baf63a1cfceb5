use glam::Vec2;
use serde::Serialize;

use super::field::FIELD_CENTER;

/// Which side the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Role {
    #[default]
    Striker,
    Goalkeeper,
}

impl Role {
    pub fn toggled(self) -> Self {
        match self {
            Role::Striker => Role::Goalkeeper,
            Role::Goalkeeper => Role::Striker,
        }
    }

    /// Wire value for the state frame and events.
    pub fn as_f32(self) -> f32 {
        match self {
            Role::Striker => 0.0,
            Role::Goalkeeper => 1.0,
        }
    }
}

/// Everything the widget shows. One per session, owned by `Machine`.
/// Serialized camelCase for the JSON snapshot JS reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub score: u32,
    pub role: Role,
    pub ball_position: Vec2,
    pub target_position: Vec2,
    pub is_blocked: bool,
    pub is_animating: bool,
    pub ai_assist_enabled: bool,
    pub show_aim_guide: bool,
    pub last_points_awarded: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            role: Role::Striker,
            ball_position: FIELD_CENTER,
            target_position: Vec2::ZERO,
            is_blocked: false,
            is_animating: false,
            ai_assist_enabled: false,
            show_aim_guide: false,
            last_points_awarded: 0,
        }
    }

    pub fn is_striker(&self) -> bool {
        self.role == Role::Striker
    }

    /// Whether the block button should be offered.
    pub fn can_offer_block(&self) -> bool {
        self.role == Role::Goalkeeper && !self.ai_assist_enabled
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
