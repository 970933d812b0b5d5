/// Tuning knobs of a `Binding`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Memoize column resolutions per record type.
    pub cache_resolutions: bool,
    /// Record a `NullValue` error when a null lands in a non-`Option` field
    /// instead of resetting the field to its default.
    pub strict_nulls: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            cache_resolutions: true,
            strict_nulls: false,
        }
    }

    pub fn cache_resolutions(mut self, cache_resolutions: bool) -> Self {
        self.cache_resolutions = cache_resolutions;
        self
    }

    pub fn strict_nulls(mut self, strict_nulls: bool) -> Self {
        self.strict_nulls = strict_nulls;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
