use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Async lock registry keyed by the unordered user pair.
///
/// Relationship mutations acquire the pair's lock before reading or writing
/// friend edges, so concurrent requests touching the same pair serialize
/// instead of interleaving. Reads never take these locks.
#[derive(Default)]
pub struct PairLocks {
    locks: Mutex<HashMap<(Uuid, Uuid), Arc<Mutex<()>>>>,
}

impl PairLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for the unordered pair `{a, b}`. The guard is held
    /// until dropped; `acquire(a, b)` and `acquire(b, a)` contend on the
    /// same lock.
    pub async fn acquire(&self, a: Uuid, b: Uuid) -> OwnedMutexGuard<()> {
        let key = if a <= b { (a, b) } else { (b, a) };
        let entry = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(key)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        entry.lock_owned().await
    }
}
