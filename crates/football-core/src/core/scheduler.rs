// core/scheduler.rs
//
// Delayed transitions keyed by game time. Replaces chained timeouts: a task
// is queued with an absolute due time and handed back once the clock passes it.

/// A task waiting for the game clock to reach `due` (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheduled<T> {
    pub due: f64,
    pub task: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    pending: Vec<Scheduled<T>>,
}

impl<T: Copy> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queue `task` to fire once the clock reaches `due`.
    pub fn schedule(&mut self, due: f64, task: T) {
        self.pending.push(Scheduled { due, task });
    }

    /// Remove and return the earliest task with `due <= now`.
    /// Equal due times come back in the order they were scheduled.
    pub fn pop_due(&mut self, now: f64) -> Option<Scheduled<T>> {
        let index = self.earliest()?;
        if self.pending[index].due > now {
            return None;
        }
        Some(self.pending.remove(index))
    }

    /// The earliest pending task, due or not.
    pub fn peek(&self) -> Option<&Scheduled<T>> {
        self.earliest().map(|index| &self.pending[index])
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn earliest(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, s) in self.pending.iter().enumerate() {
            match best {
                Some(b) if self.pending[b].due <= s.due => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl<T: Copy> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
