/// Process-wide counter of how much data the provider can serve.
///
/// Reads happen on every request; writes only come from the provider-state
/// endpoint or test setup. Last writer wins.
pub trait DataAvailability: Send + Sync {
    fn count(&self) -> u32;
    fn set_count(&self, count: u32);
}
