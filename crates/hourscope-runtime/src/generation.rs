use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues tokens for asynchronous work; only the newest token is current.
///
/// A task that finishes after a newer token was issued, or after
/// [`Generation::invalidate`], must drop its result instead of applying it.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    current: Arc<AtomicU64>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation; every earlier token stops being current.
    pub fn issue(&self) -> GenerationToken {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        GenerationToken {
            id,
            current: Arc::clone(&self.current),
        }
    }

    /// Retire all outstanding tokens without issuing a new one.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct GenerationToken {
    id: u64,
    current: Arc<AtomicU64>,
}

impl GenerationToken {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}
