//! Wire contract shared by the provider service and its consumer.
//!
//! Both sides depend on this crate so that the JSON shape, the timestamp
//! format and the provider-state labels can only drift together.

pub mod error;
pub mod interaction;
pub mod response;
pub mod state;
pub mod timestamp;

/// Path of the provider's single read endpoint.
pub const PROVIDER_JSON_PATH: &str = "/provider.json";

/// Query parameter carrying the requested local date-time.
pub const VALID_DATE_PARAM: &str = "validDate";

/// Path of the test-only provider-state endpoint.
pub const STATE_CHANGE_PATH: &str = "/pactStateChange";
