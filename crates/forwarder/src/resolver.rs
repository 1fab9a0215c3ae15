//! Sticky stack name resolution
//!
//! The last successfully resolved stack name is kept per forwarder and
//! substituted whenever a lookup fails. It never expires.

use contracts::{ContractError, MetadataLookup};

/// Outcome of one resolution
#[derive(Debug)]
pub enum Resolution {
    /// Lookup succeeded; the cache now holds this value
    Fresh(String),
    /// Lookup failed; `stack_name` is the cached value (possibly empty)
    Fallback {
        stack_name: String,
        error: ContractError,
    },
}

impl Resolution {
    /// Stack name to attach to the message
    pub fn stack_name(&self) -> &str {
        match self {
            Self::Fresh(name) => name,
            Self::Fallback { stack_name, .. } => stack_name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Last known good stack name
#[derive(Debug, Clone, Default)]
pub struct StickyStackName {
    last_known: String,
}

impl StickyStackName {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value, empty until the first successful lookup
    pub fn current(&self) -> &str {
        &self.last_known
    }

    /// Look up `container_name`, updating the cache only on success
    pub async fn resolve<L: MetadataLookup>(
        &mut self,
        lookup: &L,
        container_name: &str,
    ) -> Resolution {
        match lookup.stack_name(container_name).await {
            Ok(name) => {
                self.last_known.clone_from(&name);
                Resolution::Fresh(name)
            }
            Err(error) => Resolution::Fallback {
                stack_name: self.last_known.clone(),
                error,
            },
        }
    }
}
