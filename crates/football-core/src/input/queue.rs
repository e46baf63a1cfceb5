/// Input events the game understands.
/// Pointer coordinates are client pixels, exactly as the browser reports them;
/// mapping onto the field happens in `challenge::field`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved over the field.
    PointerMove { x: f32, y: f32 },
    /// A click/tap on the field.
    PointerDown { x: f32, y: f32 },
    /// The cursor left the field.
    PointerLeave,
    /// The field's on-screen rectangle (from `getBoundingClientRect`).
    FieldRect { left: f32, top: f32, width: f32, height: f32 },
    /// A button press from the UI layer (block, switch role, ...).
    /// `kind` identifies the button; `a`, `b`, `c` carry optional data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS pushes events as they happen; the runner hands the queue to one tick and drains it.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
