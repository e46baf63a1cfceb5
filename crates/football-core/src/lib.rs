pub mod api;
pub mod core;
pub mod bridge;
pub mod input;
pub mod extensions;
pub mod challenge;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{GameEvent, KickId};
pub use crate::core::time::FixedTimestep;
pub use crate::core::scheduler::{Scheduler, Scheduled};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{StateFrame, STATE_FLOATS, EVENT_FLOATS, PROTOCOL_VERSION};
pub use extensions::{Easing, Tween, lerp_vec2, ease_vec2};

pub use challenge::{
    FootballChallenge, Machine, Action, Change, Phase, ShotOutcome, ShotTask,
    GameState, Role, ScoringZone, DEFAULT_ZONES, score,
    FieldRect, FIELD_CENTER, ChallengeConfig, ConfigError, StaleShotPolicy,
    RandomSource, Xorshift64,
};
