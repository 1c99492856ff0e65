//! Configuration for RestrictKV
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a RestrictKV store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Dictionary Configuration
    // -------------------------------------------------------------------------
    /// Number of keys the underlying dictionary reserves room for up front.
    /// Zero is valid and simply defers allocation to the first write.
    pub capacity_hint: usize,

    // -------------------------------------------------------------------------
    // Restriction Index Configuration
    // -------------------------------------------------------------------------
    /// Number of slave records the restriction index reserves room for
    pub restriction_capacity_hint: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity_hint: 16,
            restriction_capacity_hint: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the dictionary capacity hint (in keys)
    pub fn capacity_hint(mut self, keys: usize) -> Self {
        self.config.capacity_hint = keys;
        self
    }

    /// Set the restriction index capacity hint (in slave records)
    pub fn restriction_capacity_hint(mut self, slaves: usize) -> Self {
        self.config.restriction_capacity_hint = slaves;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
