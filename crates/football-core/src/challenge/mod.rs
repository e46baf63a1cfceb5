// challenge/mod.rs
//
// The football challenge itself: pointer mapping, zone scoring, the
// striker/goalkeeper state machine, and the `Game` that drives them.

pub mod config;
pub mod field;
pub mod game;
pub mod machine;
pub mod rng;
pub mod scoring;
pub mod state;

pub use config::{ChallengeConfig, ConfigError, StaleShotPolicy};
pub use field::{FieldRect, FIELD_CENTER};
pub use game::FootballChallenge;
pub use machine::{Action, Change, Machine, Phase, ShotOutcome, ShotTask};
pub use rng::{RandomSource, Xorshift64};
pub use scoring::{ScoringZone, DEFAULT_ZONES, score};
pub use state::{GameState, Role};
