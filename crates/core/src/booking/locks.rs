use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::models::slot::SlotKey;

/// Process-local mutual exclusion keyed by slot.
///
/// Holding the guard for a slot between the conflict check and the write
/// makes concurrent claims on that slot run one after another. It does not
/// coordinate separate server processes.
#[derive(Debug, Default)]
pub struct SlotLocks {
    slots: Mutex<HashMap<SlotKey, Arc<AsyncMutex<()>>>>,
}

/// Releases the slot when dropped.
#[derive(Debug)]
pub struct SlotGuard {
    _guard: OwnedMutexGuard<()>,
}

impl SlotLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, slot: &SlotKey) -> SlotGuard {
        let lock = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries only referenced by the map are idle.
            slots.retain(|_, lock| Arc::strong_count(lock) > 1);
            slots.entry(slot.clone()).or_default().clone()
        };

        SlotGuard {
            _guard: lock.lock_owned().await,
        }
    }

    /// Number of slots currently held or waited on.
    pub fn active(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|lock| Arc::strong_count(lock) > 1)
            .count()
    }
}
