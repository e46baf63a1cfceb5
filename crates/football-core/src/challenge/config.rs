use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field::DEFAULT_AIM_MIN_X;
use super::scoring::{ScoringZone, DEFAULT_ZONES};
use crate::extensions::easing::Easing;

/// What happens to a shot still in flight when the player switches role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleShotPolicy {
    /// The pending resolve and reset still fire and still touch the score.
    #[default]
    Preserve,
    /// A role switch drops the pending transitions and ends the animation.
    Cancel,
}

/// Tunables for a session. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    /// Ball travel time before the shot is scored (seconds).
    pub travel_secs: f32,
    /// Time the result stays on screen before the ball returns (seconds).
    pub reset_secs: f32,
    /// Probability the AI goalkeeper blocks a kick.
    pub ai_block_chance: f32,
    /// Aiming only counts right of this x (field percent).
    pub aim_min_x: f32,
    /// Scoring zones in priority order.
    pub zones: Vec<ScoringZone>,
    pub stale_shots: StaleShotPolicy,
    /// Curve for the displayed ball movement.
    pub ball_easing: Easing,
    /// Seed for the AI draw. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            travel_secs: 1.0,
            reset_secs: 1.0,
            ai_block_chance: 0.4,
            aim_min_x: DEFAULT_AIM_MIN_X,
            zones: DEFAULT_ZONES.to_vec(),
            stale_shots: StaleShotPolicy::Preserve,
            ball_easing: Easing::Standard,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a positive number of seconds, got {value}")]
    NonPositiveDelay { field: &'static str, value: f32 },
    #[error("ai_block_chance must be within [0, 1], got {0}")]
    Probability(f32),
    #[error("aim_min_x must be finite, got {0}")]
    AimThreshold(f32),
    #[error("at least one scoring zone is required")]
    NoZones,
    #[error("scoring zone {index} has a negative or non-finite size")]
    Zone { index: usize },
}

impl ChallengeConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("travel_secs", self.travel_secs), ("reset_secs", self.reset_secs)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveDelay { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.ai_block_chance) {
            return Err(ConfigError::Probability(self.ai_block_chance));
        }
        if !self.aim_min_x.is_finite() {
            return Err(ConfigError::AimThreshold(self.aim_min_x));
        }
        if self.zones.is_empty() {
            return Err(ConfigError::NoZones);
        }
        for (index, zone) in self.zones.iter().enumerate() {
            let finite = [zone.x, zone.y, zone.width, zone.height].iter().all(|v| v.is_finite());
            if !finite || zone.width < 0.0 || zone.height < 0.0 {
                return Err(ConfigError::Zone { index });
            }
        }
        Ok(())
    }
}
