use workshop_contract::state::ProviderState;

use crate::domain::repository::DataAvailability;

pub struct ChangeStateUseCase<R: DataAvailability> {
    pub store: R,
}

impl<R: DataAvailability> ChangeStateUseCase<R> {
    /// Move the provider into the named state. Unknown labels leave the
    /// counter untouched and return `None`.
    pub fn execute(&self, label: &str) -> Option<ProviderState> {
        let state = ProviderState::from_label(label)?;
        self.store.set_count(state.data_count());
        Some(state)
    }
}
