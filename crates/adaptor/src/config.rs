//! Engine policy consulted while adapting requests.
//!
//! The policy is an explicit value handed to
//! [`adapt_with_engine`](crate::adapt::adapt_with_engine); there is no global
//! engine state. [`EngineConfig::default`] is what [`adapt`](crate::adapt::adapt)
//! uses.

/// Engine settings that influence how request bodies are materialized.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    always_stream: bool,
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Returns true if request bodies are always handed over as streams,
    /// even when a `Content-Length` is declared.
    pub fn always_stream(&self) -> bool {
        self.always_stream
    }
}

#[derive(Debug)]
pub struct EngineConfigBuilder {
    always_stream: bool,
}

impl EngineConfigBuilder {
    fn new() -> Self {
        Self { always_stream: false }
    }

    pub fn always_stream(mut self, always_stream: bool) -> Self {
        self.always_stream = always_stream;
        self
    }

    pub fn build(self) -> EngineConfig {
        EngineConfig { always_stream: self.always_stream }
    }
}
