use crate::configuration::Configuration;
use crate::strategy::{LinkStrategy, Strategy};
use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

type SharedStrategy = Arc<dyn Strategy + Send + Sync + 'static>;

/// Strategies indexed by the keywords they answer to.
///
/// Registration takes ownership, so a strategy is fully configured before a
/// matcher ever sees it and is shared read-only from then on.
#[derive(Clone, Default)]
pub struct Registry {
    strategies: Vec<SharedStrategy>,
    index: BTreeMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `strategy` under each of its keywords. A keyword that already
    /// belongs to another strategy moves over to this one.
    pub fn register<S>(&mut self, strategy: S)
    where
        S: Strategy + Send + Sync + 'static,
    {
        let idx = self.strategies.len();
        if strategy.keywords().is_empty() {
            warn!("Registering strategy #{} without keywords", idx);
        }
        for keyword in strategy.keywords().iter() {
            if let Some(previous) = self.index.insert(keyword.clone(), idx) {
                warn!(
                    "Keyword {:?} moved from strategy #{} to #{}",
                    keyword, previous, idx
                );
            }
        }
        debug!(
            "Registered strategy #{} for {} keyword(s)",
            idx,
            strategy.keywords().len()
        );
        self.strategies.push(Arc::new(strategy));
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn get(&self, keyword: &str) -> Option<&(dyn Strategy + Send + Sync + 'static)> {
        self.index
            .get(keyword)
            .and_then(|i| self.strategies.get(*i))
            .map(|strategy| strategy.as_ref())
    }

    /// Markup for a matched keyword, or `None` if nothing is registered
    /// under it.
    pub fn decorate(&self, keyword: &str) -> Option<String> {
        self.get(keyword).map(|strategy| strategy.decorate(keyword))
    }

    /// Every registered keyword, in sorted order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl TryFrom<Configuration> for Registry {
    type Error = anyhow::Error;

    fn try_from(conf: Configuration) -> std::result::Result<Self, Self::Error> {
        let mut registry = Registry::new();
        for (idx, entry) in conf.strategies.into_iter().enumerate() {
            let strategy = LinkStrategy::from(entry);
            if strategy.keywords().is_empty() {
                return Err(no_keywords(idx, &strategy));
            }
            registry.register(strategy);
        }
        info!(
            "Loaded {} strategies for {} keywords",
            registry.len(),
            registry.index.len()
        );
        Ok(registry)
    }
}

fn no_keywords(idx: usize, strategy: &LinkStrategy) -> anyhow::Error {
    anyhow!(
        "strategy #{} ({}) has no keywords",
        idx,
        strategy.url().unwrap_or("no url")
    )
}

/// Shorthand for loading a config file straight into a registry.
pub fn load(path: std::path::PathBuf) -> Result<Registry> {
    Registry::try_from(Configuration::parse(path)?)
}
