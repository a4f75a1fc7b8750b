pub mod provider_json;
pub mod state_change;
