//! Optional counters for instrumentation.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HydrationCounters {
    /// Siblings stepped over by backward fragment matching.
    pub backward_steps: u64,
    /// Backward matches (including nested skips) answered from the match cache.
    pub match_cache_hits: u64,
    pub locates: u64,
    pub adoptions: u64,
}
