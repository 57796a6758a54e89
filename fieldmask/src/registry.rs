//! Thread-safe mapping from method names to strategies.
//!
//! The registry wraps `Arc<RwLock<HashMap<String, Arc<dyn Strategy>>>>`:
//! lookups take the read lock and run in parallel, registrations take the
//! write lock. Cloning a registry shares the underlying map, so a strategy
//! registered through one handle is visible through every clone.

use std::{collections::HashMap, fmt, sync::Arc};

use parking_lot::RwLock;

use crate::{
    error::MaskError,
    strategy::{
        self, MaskAll, MaskBetween, MaskCorners, MaskFirst, MaskLast, MaskRegex, Strategy,
    },
};

type StrategyMap = HashMap<String, Arc<dyn Strategy>>;

fn builtins() -> [(&'static str, Arc<dyn Strategy>); 6] {
    [
        (strategy::ALL, Arc::new(MaskAll)),
        (strategy::REGEX, Arc::new(MaskRegex::new())),
        (strategy::FIRST, Arc::new(MaskFirst)),
        (strategy::LAST, Arc::new(MaskLast)),
        (strategy::CORNERS, Arc::new(MaskCorners)),
        (strategy::BETWEEN, Arc::new(MaskBetween)),
    ]
}

/// Named masking strategies, shared between clones.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: Arc<RwLock<StrategyMap>>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with `all`, `regex`, `first`, `last`,
    /// `corners` and `between`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// (Re-)registers the six built-in strategies, overwriting any entries
    /// with the same names.
    pub fn register_builtins(&self) {
        let mut strategies = self.strategies.write();
        for (name, strategy) in builtins() {
            strategies.insert(name.to_owned(), strategy);
        }
    }

    /// Registers the built-in strategies whose names are still free. Entries
    /// already present, including overrides of built-in names, are kept.
    pub fn seed_builtins(&self) {
        let mut strategies = self.strategies.write();
        for (name, strategy) in builtins() {
            strategies.entry(name.to_owned()).or_insert(strategy);
        }
    }

    /// Registers `strategy` under `name`, returning the strategy it replaced.
    ///
    /// Last write wins, which is how built-ins are overridden.
    pub fn register<S>(&self, name: impl Into<String>, strategy: S) -> Option<Arc<dyn Strategy>>
    where
        S: Strategy + 'static,
    {
        self.register_arc(name, Arc::new(strategy))
    }

    /// Registers a closure as a strategy.
    pub fn register_fn<F>(&self, name: impl Into<String>, f: F) -> Option<Arc<dyn Strategy>>
    where
        F: Fn(&str, &str, &[&str]) -> String + Send + Sync + 'static,
    {
        self.register_arc(name, Arc::new(f))
    }

    /// Registers an already shared strategy.
    pub fn register_arc(
        &self,
        name: impl Into<String>,
        strategy: Arc<dyn Strategy>,
    ) -> Option<Arc<dyn Strategy>> {
        let name = name.into();
        tracing::trace!(strategy = %name, "registering masking strategy");
        self.strategies.write().insert(name, strategy)
    }

    /// Removes the strategy registered under `name`.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Strategy>> {
        self.strategies.write().remove(name)
    }

    /// Returns the strategy registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Strategy>, MaskError> {
        self.strategies
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| MaskError::StrategyNotFound(name.to_owned()))
    }

    /// Whether a strategy is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.read().contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.strategies.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.read().len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.read().is_empty()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}
