//! Resolved, reusable provider stacks.
//!
//! A [`NestBuilder`] collects providers and a [`NestConfig`], resolves their
//! order once, and hands back a [`Nest`] that can wrap any number of payloads.

use std::fmt;

use tracing::debug;

use crate::compose::fold;
use crate::config::{Config, NestConfig};
use crate::detect::detect_cycles;
use crate::error::{LayerfoldError, LayerfoldResult};
use crate::provider::{Node, Provider};
use crate::sort::into_sorted;

/// A provider behind a trait object.
pub type BoxedProvider<T> = Box<dyn Provider<T> + Send + Sync>;

/// Providers in resolved order, ready to wrap payloads.
///
/// Providers are stored outermost first. A `Nest` holds no state between
/// calls to [`wrap`](Nest::wrap), so it can be shared across threads.
///
/// # Example
///
/// ```rust
/// use layerfold::{Nest, ProviderNode};
///
/// let nest = Nest::builder()
///     .with(ProviderNode::new("Auth", |s: String| format!("<auth>{}</auth>", s)).depends_on("Theme"))
///     .with(ProviderNode::new("Theme", |s: String| format!("<theme>{}</theme>", s)))
///     .build()
///     .unwrap();
///
/// assert_eq!(nest.names(), vec!["Theme", "Auth"]);
/// assert_eq!(nest.wrap("app".to_string()), "<theme><auth>app</auth></theme>");
/// ```
pub struct Nest<T> {
    name: String,
    providers: Vec<BoxedProvider<T>>,
    verbose: bool,
}

impl<T> Nest<T> {
    /// Start building a nest.
    pub fn builder() -> NestBuilder<T> {
        NestBuilder::new()
    }

    /// Wrap a payload in every provider, innermost first.
    pub fn wrap(&self, payload: T) -> T {
        fold(&self.providers, payload, self.verbose)
    }

    /// Get the provider names, outermost first.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Get the name of the configuration this nest was built with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the nest has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<T> fmt::Debug for Nest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nest")
            .field("name", &self.name)
            .field("providers", &self.names())
            .finish()
    }
}

/// Builder for creating nests with fluent API.
pub struct NestBuilder<T> {
    providers: Vec<BoxedProvider<T>>,
    config: NestConfig,
}

impl<T> NestBuilder<T> {
    /// Create a new nest builder.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            config: NestConfig::default(),
        }
    }

    /// Add a provider.
    pub fn with<P>(mut self, provider: P) -> Self
    where
        P: Provider<T> + Send + Sync + 'static,
    {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add an already boxed provider.
    pub fn with_boxed(mut self, provider: BoxedProvider<T>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: NestConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve the provider order and build the nest.
    ///
    /// Checks, in order: configuration validity, the provider limit, cycles
    /// (unless the precheck is disabled), then sorts, which reports unknown
    /// dependencies and any remaining cycle.
    pub fn build(self) -> LayerfoldResult<Nest<T>> {
        let config = self.config;
        config.validate().map_err(LayerfoldError::InvalidConfig)?;

        let count = self.providers.len();
        if let Some(limit) = config.max_providers {
            if count > limit {
                return Err(LayerfoldError::TooManyProviders { count, limit });
            }
        }

        if config.precheck_cycles {
            detect_cycles(&self.providers)?;
        }
        let providers = into_sorted(self.providers)?;

        let nest = Nest {
            name: config.name().to_string(),
            providers,
            verbose: config.is_verbose(),
        };
        debug!(nest = nest.name(), order = ?nest.names(), "resolved provider order");
        Ok(nest)
    }
}

impl<T> Default for NestBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
