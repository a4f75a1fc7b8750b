use crate::infra::store::InMemoryDataStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: InMemoryDataStore,
    pub state_change_enabled: bool,
}

impl AppState {
    pub fn new(initial_count: u32, state_change_enabled: bool) -> Self {
        Self {
            store: InMemoryDataStore::new(initial_count),
            state_change_enabled,
        }
    }

    pub fn data_store(&self) -> InMemoryDataStore {
        self.store.clone()
    }
}
