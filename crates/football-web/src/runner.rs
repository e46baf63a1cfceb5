use football_core::{
    ChallengeConfig, ConfigError, EngineContext, FixedTimestep, FootballChallenge, Game, GameConfig,
    InputEvent, InputQueue, RenderContext, StateFrame, STATE_FLOATS,
};

/// Game runner that wires a `Game` to the browser frame loop.
///
/// The bridge keeps one in a `thread_local!` and exports free functions via
/// `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to every tick after the first in a frame, so input applies once.
    no_input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    frame: StateFrame,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            no_input: InputQueue::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            frame: StateFrame::default(),
            config,
            game,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.render();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one browser frame: zero or more fixed ticks, then publish the state frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            self.ctx.advance();
            let input = if step == 0 { &self.input } else { &self.no_input };
            self.game.update(&mut self.ctx, input);
        }

        // A frame shorter than one tick keeps its input for the next frame
        if steps > 0 {
            self.input.drain();
        }

        self.render();
    }

    fn render(&mut self) {
        let mut render_ctx = RenderContext {
            frame: &mut self.frame,
            elapsed: self.ctx.elapsed(),
        };
        self.game.render(&mut render_ctx);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn frame(&self) -> &StateFrame {
        &self.frame
    }

    // ---- Pointer accessors for Float32Array views ----

    pub fn state_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn state_len(&self) -> u32 {
        STATE_FLOATS as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}

impl GameRunner<FootballChallenge> {
    /// Parse and apply a JSON config. On error the running session is untouched.
    pub fn configure(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = ChallengeConfig::from_json(json)?;
        self.game.reconfigure(config);
        self.render();
        Ok(())
    }

    pub fn state_json(&self) -> String {
        self.game.state_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use football_core::bridge::protocol::{custom, events, STATE_ANIMATING, STATE_ROLE, STATE_SCORE};
    use football_core::GameEvent;

    const DT: f32 = 1.0 / 60.0;

    fn runner() -> GameRunner<FootballChallenge> {
        let mut runner = GameRunner::new(FootballChallenge::new());
        runner.init();
        runner.push_input(InputEvent::FieldRect { left: 20.0, top: 10.0, width: 500.0, height: 200.0 });
        runner
    }

    fn events(runner: &GameRunner<FootballChallenge>) -> Vec<GameEvent> {
        runner.ctx.events.clone()
    }

    #[test]
    fn not_ticking_before_init() {
        let mut runner = GameRunner::new(FootballChallenge::new());
        runner.push_input(InputEvent::Custom { kind: custom::SWITCH_ROLE, a: 0.0, b: 0.0, c: 0.0 });
        runner.tick(DT);
        assert_eq!(runner.frame().as_floats()[STATE_ROLE], 0.0);
    }

    #[test]
    fn full_kick_through_the_frame_loop() {
        let mut runner = runner();
        // (470 - 20) / 500 = 90%, (44 - 10) / 200 = 17%
        runner.push_input(InputEvent::PointerDown { x: 470.0, y: 44.0 });
        runner.tick(DT);
        assert_eq!(runner.game_events_len(), 1);
        assert_eq!(events(&runner)[0].kind, events::KICK);
        assert_eq!(runner.frame().as_floats()[STATE_ANIMATING], 1.0);

        // one second of 30 fps frames
        let mut resolved = Vec::new();
        for _ in 0..30 {
            runner.tick(2.0 * DT);
            resolved.extend(events(&runner).into_iter().filter(|e| e.kind == events::SHOT_RESOLVED));
        }
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].a, 3.0);
        assert_eq!(runner.frame().as_floats()[STATE_SCORE], 3.0);
        assert_eq!(runner.game().state().score, 3);
    }

    #[test]
    fn long_frame_applies_input_once() {
        let mut runner = runner();
        runner.tick(DT);
        runner.push_input(InputEvent::Custom { kind: custom::SWITCH_ROLE, a: 0.0, b: 0.0, c: 0.0 });
        runner.tick(5.0 * DT);
        assert_eq!(runner.frame().as_floats()[STATE_ROLE], 1.0);
        assert_eq!(runner.game_events_len(), 1);
    }

    #[test]
    fn short_frame_keeps_input_for_later() {
        let mut runner = runner();
        runner.tick(DT);
        runner.push_input(InputEvent::Custom { kind: custom::SWITCH_ROLE, a: 0.0, b: 0.0, c: 0.0 });
        runner.tick(DT / 4.0);
        assert_eq!(runner.frame().as_floats()[STATE_ROLE], 0.0);
        runner.tick(DT);
        assert_eq!(runner.frame().as_floats()[STATE_ROLE], 1.0);
    }

    #[test]
    fn configure_accepts_valid_and_rejects_invalid() {
        let mut runner = runner();
        runner.tick(DT);

        assert!(runner.configure(r#"{ "travel_secs": 0.25 }"#).is_ok());
        assert_eq!(runner.game().machine().config().travel_secs, 0.25);

        assert!(runner.configure(r#"{ "ai_block_chance": 2 }"#).is_err());
        assert_eq!(runner.game().machine().config().travel_secs, 0.25);
    }

    #[test]
    fn state_json_reflects_role() {
        let mut runner = runner();
        runner.push_input(InputEvent::Custom { kind: custom::SWITCH_ROLE, a: 0.0, b: 0.0, c: 0.0 });
        runner.tick(DT);
        assert!(runner.state_json().contains(r#""role":"Goalkeeper""#));
        assert_eq!(runner.state_len(), STATE_FLOATS as u32);
        assert_eq!(runner.max_events(), 32);
    }
}
