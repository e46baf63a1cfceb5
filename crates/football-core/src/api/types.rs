use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Identifies one accepted kick.
/// Scheduled transitions carry it so a resolve or reset can be matched to its shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct KickId(pub u32);

/// A game event communicated from Rust to the presentation layer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
/// Kinds are listed in `bridge::protocol`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_is_four_packed_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
        let events = [GameEvent::new(2.0, 3.0, 6.0, 0.0)];
        let floats: &[f32] = bytemuck::cast_slice(&events);
        assert_eq!(floats, &[2.0, 3.0, 6.0, 0.0]);
    }
}
