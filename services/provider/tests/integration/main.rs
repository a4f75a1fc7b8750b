mod helpers;
mod provider_json_test;
mod state_change_test;
