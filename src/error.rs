//! Error types for Layerfold.

use thiserror::Error;

/// Root error type for Layerfold operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerfoldError {
    /// Dependency resolution failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Provider set is larger than the configured limit
    #[error("Provider set has {count} providers, limit is {limit}")]
    TooManyProviders { count: usize, limit: usize },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors that can occur while ordering providers by their dependencies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A provider's dependency chain loops back onto a provider still being visited
    #[error("Circular dependency detected involving \"{name}\"")]
    CycleDetected { name: String },

    /// A provider names a dependency that is not part of the set
    #[error("Provider \"{provider}\" depends on unknown provider \"{dependency}\"")]
    UnknownDependency { provider: String, dependency: String },
}

impl ResolveError {
    pub(crate) fn cycle(name: &str) -> Self {
        ResolveError::CycleDetected {
            name: name.to_string(),
        }
    }

    pub(crate) fn unknown(provider: &str, dependency: &str) -> Self {
        ResolveError::UnknownDependency {
            provider: provider.to_string(),
            dependency: dependency.to_string(),
        }
    }

    /// Name of the provider the error is about.
    ///
    /// For a cycle this is the re-entered provider; for an unknown dependency
    /// it is the dependent, not the missing name.
    pub fn provider(&self) -> &str {
        match self {
            ResolveError::CycleDetected { name } => name,
            ResolveError::UnknownDependency { provider, .. } => provider,
        }
    }
}

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Result type alias for general Layerfold operations.
pub type LayerfoldResult<T> = Result<T, LayerfoldError>;
