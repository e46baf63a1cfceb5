use crate::api::types::GameEvent;
use crate::bridge::protocol::StateFrame;
use crate::input::queue::InputQueue;

/// Configuration for the engine loop, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_events: 32,
        }
    }
}

/// The contract a game fulfills to be driven by the runner.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up the initial session.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick. Consume input, fire due transitions, emit events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only pass that publishes the current state into the frame JS reads.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable engine state passed to `Game::init` and `Game::update`.
pub struct EngineContext {
    pub events: Vec<GameEvent>,
    max_events: usize,
    dt: f32,
    ticks: u64,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            events: Vec::with_capacity(config.max_events),
            max_events: config.max_events,
            dt: config.fixed_dt,
            ticks: 0,
        }
    }

    /// Emit a game event to be forwarded to the presentation layer.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full, dropping event kind {}", event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Advance the game clock by one fixed tick.
    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    /// Fixed delta time of a single tick, in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Game time in seconds. Derived from the tick count so it never drifts.
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.dt as f64
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Render context handed to `Game::render`.
pub struct RenderContext<'a> {
    pub frame: &'a mut StateFrame,
    pub elapsed: f64,
}
