use std::sync::{Arc, Mutex};

use crate::errors::ServerError;
use crate::store::seed::Seed;
use crate::store::state::AppState;

/// Shared handle to the in-memory dashboard state. Cloned into every worker.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<AppState>>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self::new(AppState::from_seed(seed))
    }

    /// Runs `f` with exclusive access to the state. One request's reads and
    /// writes happen inside a single call.
    pub fn with_state<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut AppState) -> Result<T, ServerError>,
    {
        let mut guard = self.inner.lock().map_err(|_| {
            log::error!("state lock poisoned");
            ServerError::InternalError
        })?;
        f(&mut *guard)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::from_seed(Seed::default())
    }
}
