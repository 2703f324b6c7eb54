//! Run-scoped package registry.
//!
//! Ensures each distinct package name is announced once per run, no matter how
//! many files declare it or which worker asks first.

use dashmap::DashSet;
use std::sync::Arc;

/// Thread-safe handle shared by every worker of a run
pub type SharedRegistry = Arc<PackageRegistry>;

#[derive(Debug, Default)]
pub struct PackageRegistry {
    announced: DashSet<String>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedRegistry {
        Arc::new(Self::new())
    }

    /// Record `package` and return true the first time it is seen in this run.
    ///
    /// The check and the insert are a single atomic step on the owning shard,
    /// so two callers racing on a new name cannot both get `true`.
    pub fn announce(&self, package: &str) -> bool {
        if self.announced.contains(package) {
            return false;
        }
        self.announced.insert(package.to_string())
    }

    pub fn is_announced(&self, package: &str) -> bool {
        self.announced.contains(package)
    }

    pub fn len(&self) -> usize {
        self.announced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.announced.is_empty()
    }
}
