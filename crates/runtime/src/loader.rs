/// Ticket identifying one load attempt. A completion only applies while
/// its ticket is still the current one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Observable load lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T, E> {
    Idle,
    Loading,
    Ready(T),
    Failed(E),
}

/// One-shot asset loader with generation-tagged cancellation.
///
/// The host performs the actual I/O; this type owns only the lifecycle:
/// `begin` hands out a ticket, `complete` applies a result, and a stale
/// completion (after `cancel` or a newer `begin`) is a defined no-op. The
/// held asset is therefore replaced atomically or not at all; consumers
/// never observe a torn load.
#[derive(Debug)]
pub struct AssetLoader<T, E> {
    generation: u64,
    state: LoadState<T, E>,
}

impl<T, E> Default for AssetLoader<T, E> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: LoadState::Idle,
        }
    }
}

impl<T, E> AssetLoader<T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a load. Any in-flight attempt is superseded:
    /// its ticket goes stale and its completion will be ignored.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Applies a load result. Returns `false` without touching state when
    /// the ticket is stale.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<T, E>) -> bool {
        if ticket.0 != self.generation || !matches!(self.state, LoadState::Loading) {
            return false;
        }
        self.state = match result {
            Ok(asset) => LoadState::Ready(asset),
            Err(e) => LoadState::Failed(e),
        };
        true
    }

    /// Abandons an in-flight load (component unmount). A completed or
    /// failed load is left as is.
    pub fn cancel(&mut self) {
        if matches!(self.state, LoadState::Loading) {
            self.generation += 1;
            self.state = LoadState::Idle;
        }
    }

    pub fn state(&self) -> &LoadState<T, E> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn asset(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(asset) => Some(asset),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match &self.state {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
