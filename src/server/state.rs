use crate::db::ActivityLog;
use crate::errors::{AppError, AppResult};
use crate::storage::Store;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

/// Everything a handler touches while holding the lock.
pub struct Shared {
    pub store: Box<dyn Store>,
    pub rng: StdRng,
}

/// Handler state. The store and the random source sit behind one mutex, so
/// each request's load → modify → save sequence runs alone and concurrent
/// calls cannot lose count updates. Processes sharing a data directory are
/// not coordinated.
#[derive(Clone)]
pub struct AppState {
    shared: Arc<Mutex<Shared>>,
    pub history_limit: usize,
    pub activity: ActivityLog,
}

impl AppState {
    pub fn new(
        store: Box<dyn Store>,
        rng: StdRng,
        history_limit: usize,
        activity: ActivityLog,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared { store, rng })),
            history_limit,
            activity,
        }
    }

    /// Run `f` with the lock held on the blocking pool. Store access is
    /// synchronous file I/O and must stay off the async workers.
    pub async fn with_shared<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Shared) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let shared = Arc::clone(&self.shared);

        tokio::task::spawn_blocking(move || {
            let mut guard = shared
                .lock()
                .map_err(|_| AppError::Other("state lock poisoned".to_string()))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| AppError::Other(format!("request worker failed: {e}")))?
    }

    /// Append to the activity log from the blocking pool.
    pub async fn record_activity(&self, operation: &'static str, target: String, message: String) {
        let activity = self.activity.clone();

        let written =
            tokio::task::spawn_blocking(move || activity.record(operation, &target, &message))
                .await;
        if let Err(e) = written {
            tracing::warn!(operation, error = %e, "activity log task failed");
        }
    }
}
