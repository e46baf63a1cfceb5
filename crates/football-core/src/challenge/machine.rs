// challenge/machine.rs
//
// Striker/goalkeeper state machine. Owns the single GameState of a session.
// Player actions go through `apply`; the two timed phases of a kick are
// scheduled transitions that `advance` fires once the game clock reaches them.
//
//   Idle --kick--> Traveling --travel_secs--> Resolved --reset_secs--> Idle

use glam::Vec2;

use super::config::{ChallengeConfig, StaleShotPolicy};
use super::field::{in_attacking_third, FIELD_CENTER};
use super::rng::RandomSource;
use super::scoring::score;
use super::state::{GameState, Role};
use crate::api::types::KickId;
use crate::core::scheduler::Scheduler;

/// A player action, already mapped into field percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Hover(Vec2),
    Click(Vec2),
    Leave,
    Block,
    SwitchRole,
    ToggleAi,
    Restart,
}

/// A timed transition of an in-flight kick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotTask {
    Resolve { kick: KickId, target: Vec2 },
    Reset { kick: KickId },
}

/// Where the machine is in the kick sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Traveling(KickId),
    Resolved(KickId),
}

impl Phase {
    /// Frame encoding: 0 idle, 1 ball travelling, 2 result on screen.
    pub fn as_f32(self) -> f32 {
        match self {
            Phase::Idle => 0.0,
            Phase::Traveling(_) => 1.0,
            Phase::Resolved(_) => 2.0,
        }
    }
}

/// The result of scoring one kick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOutcome {
    pub kick: KickId,
    pub target: Vec2,
    pub blocked: bool,
    pub points: u32,
    /// Running score after this shot.
    pub score: u32,
}

/// What a transition changed. The game turns these into events and ball motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change {
    AimShown(Vec2),
    AimHidden,
    Kicked { kick: KickId, target: Vec2, ai_block: Option<bool> },
    Blocked,
    RoleSwitched(Role),
    AiToggled(bool),
    Restarted,
    Resolved(ShotOutcome),
    Reset(KickId),
}

pub struct Machine {
    state: GameState,
    config: ChallengeConfig,
    scheduler: Scheduler<ShotTask>,
    random: Box<dyn RandomSource>,
    next_kick: u32,
}

impl Machine {
    pub fn new(config: ChallengeConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            state: GameState::new(),
            config,
            scheduler: Scheduler::new(),
            random,
            next_kick: 1,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    /// Where the current kick is. Published in the state frame.
    pub fn phase(&self) -> Phase {
        if !self.state.is_animating {
            return Phase::Idle;
        }
        match self.scheduler.peek().map(|s| s.task) {
            Some(ShotTask::Resolve { kick, .. }) => Phase::Traveling(kick),
            Some(ShotTask::Reset { kick }) => Phase::Resolved(kick),
            None => Phase::Idle,
        }
    }

    /// Apply a player action at game time `now`. Returns `None` when it was a no-op.
    pub fn apply(&mut self, action: Action, now: f64) -> Option<Change> {
        match action {
            Action::Hover(p) => self.hover(p),
            Action::Click(p) => self.click(p, now),
            Action::Leave => self.leave(),
            Action::Block => self.block(),
            Action::SwitchRole => Some(self.switch_role()),
            Action::ToggleAi => self.toggle_ai(),
            Action::Restart => Some(self.restart()),
        }
    }

    fn can_aim_at(&self, p: Vec2) -> bool {
        self.state.is_striker() && !self.state.is_animating && in_attacking_third(p, self.config.aim_min_x)
    }

    pub fn hover(&mut self, p: Vec2) -> Option<Change> {
        if self.can_aim_at(p) {
            self.state.target_position = p;
            self.state.show_aim_guide = true;
            return Some(Change::AimShown(p));
        }
        if self.state.show_aim_guide {
            self.state.show_aim_guide = false;
            return Some(Change::AimHidden);
        }
        None
    }

    pub fn click(&mut self, p: Vec2, now: f64) -> Option<Change> {
        if !self.can_aim_at(p) {
            log::debug!("click at ({:.1}, {:.1}) ignored", p.x, p.y);
            return None;
        }
        self.state.target_position = p;
        self.kick(p, now)
    }

    pub fn leave(&mut self) -> Option<Change> {
        if !self.state.show_aim_guide {
            return None;
        }
        self.state.show_aim_guide = false;
        Some(Change::AimHidden)
    }

    /// Start a kick toward `target`. Only a striker with the ball at rest may kick.
    pub fn kick(&mut self, target: Vec2, now: f64) -> Option<Change> {
        if !self.state.is_striker() || self.state.is_animating {
            return None;
        }

        let kick = KickId(self.next_kick);
        self.next_kick += 1;

        self.state.is_animating = true;
        self.state.ball_position = target;

        let ai_block = if self.state.ai_assist_enabled {
            let blocked = self.random.chance(self.config.ai_block_chance);
            self.state.is_blocked = blocked;
            Some(blocked)
        } else {
            None
        };

        self.scheduler
            .schedule(now + self.config.travel_secs as f64, ShotTask::Resolve { kick, target });
        log::info!(
            "kick {} toward ({:.1}, {:.1}){}",
            kick.0,
            target.x,
            target.y,
            match ai_block {
                Some(true) => ", keeper will block",
                Some(false) => ", keeper beaten",
                None => "",
            }
        );
        Some(Change::Kicked { kick, target, ai_block })
    }

    /// Manual block. Goalkeeper only, not in AI mode, once per shot.
    pub fn block(&mut self) -> Option<Change> {
        if !self.state.can_offer_block() || self.state.is_blocked {
            return None;
        }
        self.state.is_blocked = true;
        Some(Change::Blocked)
    }

    /// Always allowed. Clears the visible shot state; the animation flag and
    /// pending transitions follow the configured stale-shot policy.
    pub fn switch_role(&mut self) -> Change {
        self.state.role = self.state.role.toggled();
        self.state.is_blocked = false;
        self.state.ball_position = FIELD_CENTER;
        self.state.show_aim_guide = false;
        self.state.last_points_awarded = 0;

        if self.config.stale_shots == StaleShotPolicy::Cancel && !self.scheduler.is_empty() {
            log::debug!("role switch cancels {} pending transition(s)", self.scheduler.len());
            self.scheduler.clear();
            self.state.is_animating = false;
        }

        log::info!("role switched to {:?}", self.state.role);
        Change::RoleSwitched(self.state.role)
    }

    /// The AI toggle is only offered to the goalkeeper.
    pub fn toggle_ai(&mut self) -> Option<Change> {
        if self.state.role != Role::Goalkeeper {
            return None;
        }
        self.state.ai_assist_enabled = !self.state.ai_assist_enabled;
        Some(Change::AiToggled(self.state.ai_assist_enabled))
    }

    /// Fresh session. Keeps the AI setting, drops anything in flight.
    pub fn restart(&mut self) -> Change {
        let ai = self.state.ai_assist_enabled;
        self.state = GameState::new();
        self.state.ai_assist_enabled = ai;
        self.scheduler.clear();
        Change::Restarted
    }

    /// Fire every transition due at or before `now`, in due order.
    pub fn advance(&mut self, now: f64) -> Vec<Change> {
        let mut changes = Vec::new();
        while let Some(due) = self.scheduler.pop_due(now) {
            match due.task {
                ShotTask::Resolve { kick, target } => {
                    let outcome = self.resolve(kick, target);
                    self.scheduler
                        .schedule(due.due + self.config.reset_secs as f64, ShotTask::Reset { kick });
                    changes.push(Change::Resolved(outcome));
                }
                ShotTask::Reset { kick } => {
                    self.reset();
                    changes.push(Change::Reset(kick));
                }
            }
        }
        changes
    }

    /// Score against the block flag as it stands now, not as it was at kick time.
    fn resolve(&mut self, kick: KickId, target: Vec2) -> ShotOutcome {
        let blocked = self.state.is_blocked;
        let points = score(&self.config.zones, target.x, target.y, blocked);
        self.state.last_points_awarded = points;
        // zone points come from config, so a long session must not overflow
        self.state.score = self.state.score.saturating_add(points);

        let outcome = ShotOutcome {
            kick,
            target,
            blocked,
            points,
            score: self.state.score,
        };
        log::info!(
            "kick {} resolved: {} point(s){}, score {}",
            kick.0,
            points,
            if blocked { " (blocked)" } else { "" },
            self.state.score
        );
        outcome
    }

    /// Hand back the random source so a rebuilt machine continues its sequence.
    pub fn into_random(self) -> Box<dyn RandomSource> {
        self.random
    }

    fn reset(&mut self) {
        self.state.ball_position = FIELD_CENTER;
        self.state.is_blocked = false;
        self.state.is_animating = false;
        self.state.show_aim_guide = false;
        self.state.last_points_awarded = 0;
    }
}
