use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::repository::DataAvailability;

/// In-memory `DataAvailability` shared between handler clones.
#[derive(Clone, Debug)]
pub struct InMemoryDataStore {
    count: Arc<RwLock<u32>>,
}

impl InMemoryDataStore {
    pub fn new(count: u32) -> Self {
        Self {
            count: Arc::new(RwLock::new(count)),
        }
    }
}

impl DataAvailability for InMemoryDataStore {
    fn count(&self) -> u32 {
        // A u32 cannot be left half-written, so a poisoned lock is still usable.
        *self.count.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_count(&self, count: u32) {
        *self.count.write().unwrap_or_else(PoisonError::into_inner) = count;
    }
}
