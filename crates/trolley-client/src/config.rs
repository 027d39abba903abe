//! Store configuration.

/// What to do when a fetch fails.
///
/// Mutations always propagate their failures; reads are the policy
/// decision. The source system silently kept stale data on read
/// failures and surfaced write failures, so `KeepStale` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchFailurePolicy {
    /// Log the failure and keep whatever items were already loaded.
    #[default]
    KeepStale,
    /// Surface the failure to the caller.
    Propagate,
}

/// Configuration for a cart store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Fetch failure handling.
    pub fetch_failure: FetchFailurePolicy,
}

impl StoreConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the fetch failure policy.
    pub fn with_fetch_failure(mut self, policy: FetchFailurePolicy) -> Self {
        self.fetch_failure = policy;
        self
    }
}
