// File: crates/sparkline-core/src/id.rs
// Summary: Opaque per-instance tokens used to scope gradient/filter ids in one document.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    /// Wrap a caller-provided token. Characters outside `[A-Za-z0-9_-]` are replaced
    /// with `_` so the token is a valid XML id fragment.
    pub fn new(token: impl AsRef<str>) -> Self {
        let cleaned: String = token
            .as_ref()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        if cleaned.is_empty() { Self("sparkline".to_string()) } else { Self(cleaned) }
    }

    /// `{id}-{suffix}`, e.g. `spark-0-stroke`.
    pub fn scoped(&self, suffix: &str) -> String {
        format!("{}-{}", self.0, suffix)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Hands out distinct ids for every chart placed in the same document.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 0 }
    }

    pub fn allocate(&mut self) -> InstanceId {
        let id = InstanceId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self { Self::new("spark") }
}
