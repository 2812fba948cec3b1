/// Drain-style outbound queue.
///
/// Core code emits commands as values; the host polls them once per frame
/// with `drain`. This keeps the core deterministic and callback-free: a
/// command is observed exactly once, in emission order.
#[derive(Debug)]
pub struct CommandBus<C> {
    queue: Vec<C>,
}

impl<C> Default for CommandBus<C> {
    fn default() -> Self {
        Self { queue: Vec::new() }
    }
}

impl<C> CommandBus<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, command: C) {
        self.queue.push(command);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> Vec<C> {
        std::mem::take(&mut self.queue)
    }
}
