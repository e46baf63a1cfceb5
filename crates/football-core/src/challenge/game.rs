//! Football Challenge - click the attacking third to shoot at the goal zones,
//! or switch to goalkeeper and block (by hand or with the AI keeper).

use glam::Vec2;

use super::config::ChallengeConfig;
use super::field::{FieldRect, FIELD_CENTER};
use super::machine::{Action, Change, Machine};
use super::rng::{RandomSource, Xorshift64};
use super::state::GameState;
use crate::api::game::{EngineContext, Game, RenderContext};
use crate::api::types::GameEvent;
use crate::bridge::protocol::{custom, events};
use crate::extensions::tween::Tween;
use crate::input::queue::{InputEvent, InputQueue};

/// Seed used when neither the config nor the host supplies one.
const DEFAULT_SEED: u64 = 42;

pub struct FootballChallenge {
    machine: Machine,
    field: FieldRect,
    /// Ball position as drawn. Trails `GameState::ball_position` through the tween.
    ball_display: Vec2,
    ball_tween: Option<Tween>,
    last_kick: u32,
}

impl FootballChallenge {
    pub fn new() -> Self {
        Self::with_config(ChallengeConfig::default())
    }

    pub fn with_config(config: ChallengeConfig) -> Self {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        Self::with_random(config, Box::new(Xorshift64::new(seed)))
    }

    /// Build with an explicit random source for the AI keeper.
    pub fn with_random(config: ChallengeConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            machine: Machine::new(config, random),
            field: FieldRect::default(),
            ball_display: FIELD_CENTER,
            ball_tween: None,
            last_kick: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        self.machine.state()
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn field(&self) -> FieldRect {
        self.field
    }

    pub fn ball_display(&self) -> Vec2 {
        self.ball_display
    }

    /// Replace the configuration. Starts a fresh session; the AI setting carries over.
    /// Without a new seed the AI keeper keeps drawing from its current sequence.
    pub fn reconfigure(&mut self, config: ChallengeConfig) {
        let ai = self.state().ai_assist_enabled;
        let field = self.field;
        let previous = std::mem::take(self);
        let random: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(Xorshift64::new(seed)),
            None => previous.machine.into_random(),
        };
        *self = Self::with_random(config, random);
        self.field = field;
        if ai {
            // the toggle is goalkeeper-only, so flip through the role switch
            self.machine.switch_role();
            self.machine.toggle_ai();
            self.machine.switch_role();
        }
        log::info!("configuration replaced, new session started");
    }

    /// JSON snapshot of the game state for the presentation layer.
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.state()).unwrap_or_else(|err| {
            log::error!("state snapshot failed: {}", err);
            String::from("{}")
        })
    }

    fn map_pointer(&self, x: f32, y: f32) -> Option<Vec2> {
        let mapped = self.field.to_percent(Vec2::new(x, y));
        if mapped.is_none() {
            log::debug!("pointer at ({}, {}) ignored: field rect not known yet", x, y);
        }
        mapped
    }

    fn action_for(&self, event: &InputEvent) -> Option<Action> {
        match *event {
            InputEvent::PointerMove { x, y } => self.map_pointer(x, y).map(Action::Hover),
            InputEvent::PointerDown { x, y } => self.map_pointer(x, y).map(Action::Click),
            InputEvent::PointerLeave => Some(Action::Leave),
            InputEvent::Custom { kind, .. } => match kind {
                custom::BLOCK => Some(Action::Block),
                custom::SWITCH_ROLE => Some(Action::SwitchRole),
                custom::TOGGLE_AI => Some(Action::ToggleAi),
                custom::NEW_GAME => Some(Action::Restart),
                other => {
                    log::debug!("unknown custom event kind {}", other);
                    None
                }
            },
            InputEvent::FieldRect { .. } => None,
        }
    }

    fn set_field(&mut self, rect: FieldRect) {
        if !rect.is_usable() {
            log::warn!("ignoring unusable field rect {:?}", rect);
            return;
        }
        self.field = rect;
    }

    /// Send the displayed ball toward `to` over the travel time.
    fn move_ball(&mut self, to: Vec2) {
        let config = self.machine.config();
        let tween = match &self.ball_tween {
            Some(current) if !current.is_complete() => current.retarget(to, config.travel_secs),
            _ => Tween::new(self.ball_display, to, config.travel_secs, config.ball_easing),
        };
        self.ball_tween = Some(tween);
    }

    /// Turn a state change into ball motion and an outgoing event.
    fn publish(&mut self, ctx: &mut EngineContext, change: Change) {
        match change {
            Change::AimShown(_) | Change::AimHidden => {}
            Change::Kicked { kick, target, .. } => {
                self.last_kick = kick.0;
                self.move_ball(target);
                ctx.emit_event(GameEvent::new(events::KICK, target.x, target.y, kick.0 as f32));
            }
            Change::Blocked => {
                ctx.emit_event(GameEvent::new(events::BLOCKED, 0.0, 0.0, 0.0));
            }
            Change::RoleSwitched(role) => {
                self.move_ball(FIELD_CENTER);
                ctx.emit_event(GameEvent::new(events::ROLE_CHANGED, role.as_f32(), 0.0, 0.0));
            }
            Change::AiToggled(enabled) => {
                let a = if enabled { 1.0 } else { 0.0 };
                ctx.emit_event(GameEvent::new(events::AI_TOGGLED, a, 0.0, 0.0));
            }
            Change::Restarted => {
                self.last_kick = 0;
                self.move_ball(FIELD_CENTER);
                ctx.emit_event(GameEvent::new(events::RESTARTED, 0.0, 0.0, 0.0));
            }
            Change::Resolved(outcome) => {
                let blocked = if outcome.blocked { 1.0 } else { 0.0 };
                ctx.emit_event(GameEvent::new(
                    events::SHOT_RESOLVED,
                    outcome.points as f32,
                    outcome.score as f32,
                    blocked,
                ));
            }
            Change::Reset(kick) => {
                self.move_ball(FIELD_CENTER);
                ctx.emit_event(GameEvent::new(events::SHOT_RESET, kick.0 as f32, 0.0, 0.0));
            }
        }
    }
}

impl Default for FootballChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for FootballChallenge {
    fn init(&mut self, _ctx: &mut EngineContext) {
        let config = self.machine.config();
        log::info!(
            "football challenge ready: {} zone(s), travel {}s, reset {}s, ai block chance {}",
            config.zones.len(),
            config.travel_secs,
            config.reset_secs,
            config.ai_block_chance
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let now = ctx.elapsed();

        // Input first, then whatever the clock has made due
        for event in input.iter() {
            if let InputEvent::FieldRect { left, top, width, height } = *event {
                self.set_field(FieldRect::new(left, top, width, height));
                continue;
            }
            if let Some(action) = self.action_for(event) {
                if let Some(change) = self.machine.apply(action, now) {
                    self.publish(ctx, change);
                }
            }
        }

        for change in self.machine.advance(now) {
            self.publish(ctx, change);
        }

        if let Some(tween) = &mut self.ball_tween {
            self.ball_display = tween.tick(ctx.dt());
            if tween.is_complete() {
                self.ball_tween = None;
            }
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.frame.write(
            self.state(),
            self.machine.phase(),
            self.ball_display,
            self.last_kick,
            ctx.elapsed,
        );
    }
}
