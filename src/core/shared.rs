//! Mutex-guarded handle for sharing one state across threads

use crate::core::exchange::ExchangeState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable handle to a single [`ExchangeState`].
///
/// Every read and update holds one lock over the whole state.
#[derive(Clone, Default)]
pub struct SharedExchange {
    inner: Arc<Mutex<ExchangeState>>,
}

impl SharedExchange {
    pub fn new(state: ExchangeState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&ExchangeState) -> R) -> R {
        f(&self.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut ExchangeState) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn snapshot(&self) -> ExchangeState {
        self.lock().clone()
    }

    // A panic mid-update cannot leave the maps half-written, so a poisoned
    // lock still guards usable data.
    fn lock(&self) -> MutexGuard<'_, ExchangeState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
