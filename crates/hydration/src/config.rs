#[derive(Clone, Debug)]
pub struct HydrationConfig {
    /// Report recoverable mismatches (logged and recorded). Defaults to on in
    /// debug builds only; the fatal fragment-anchor error is raised regardless.
    pub dev_diagnostics: bool,
    /// Memoize close-marker to open-marker matches. Turning this off makes every
    /// backward match rescan, which is only useful for comparing costs.
    pub cache_fragment_matches: bool,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            dev_diagnostics: cfg!(debug_assertions),
            cache_fragment_matches: true,
        }
    }
}
