//! Configuration for building a [`Nest`](crate::Nest).

/// Base trait for configuration types.
///
/// # Example
///
/// ```rust
/// use layerfold::Config;
///
/// #[derive(Debug, Clone)]
/// struct AppConfig {
///     verbose: bool,
/// }
///
/// impl Config for AppConfig {
///     fn name(&self) -> &str {
///         "app"
///     }
///
///     fn is_verbose(&self) -> bool {
///         self.verbose
///     }
/// }
/// ```
pub trait Config: Send + Sync {
    /// Returns the configuration name/identifier.
    fn name(&self) -> &str {
        "default"
    }

    /// Returns whether verbose output is enabled.
    fn is_verbose(&self) -> bool {
        false
    }

    /// Validates the configuration.
    ///
    /// Returns Ok(()) if valid, or an error message describing the issue.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Settings applied when a [`NestBuilder`](crate::NestBuilder) resolves its providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestConfig {
    /// Configuration name
    pub name: String,
    /// Largest provider set accepted, if any
    pub max_providers: Option<usize>,
    /// Run the standalone cycle check before sorting
    pub precheck_cycles: bool,
    /// Log each wrap at debug level instead of trace
    pub verbose: bool,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            max_providers: None,
            precheck_cycles: true,
            verbose: false,
        }
    }
}

impl NestConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Reject provider sets with more than `limit` entries.
    ///
    /// Resolution recurses once per dependency level, so this also bounds
    /// stack depth.
    pub fn max_providers(mut self, limit: usize) -> Self {
        self.max_providers = Some(limit);
        self
    }

    /// Skip the standalone cycle check. Sorting still reports cycles.
    pub fn skip_cycle_precheck(mut self) -> Self {
        self.precheck_cycles = false;
        self
    }

    /// Enable verbose output.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Config for NestConfig {
    fn name(&self) -> &str {
        if self.name.is_empty() {
            "default"
        } else {
            &self.name
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn validate(&self) -> Result<(), String> {
        match self.max_providers {
            Some(0) => Err("max_providers must be greater than 0".to_string()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NestConfig::new();

        assert_eq!(config.name(), "default");
        assert_eq!(config.max_providers, None);
        assert!(config.precheck_cycles);
        assert!(!config.is_verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = NestConfig::new()
            .with_name("app-shell")
            .max_providers(16)
            .skip_cycle_precheck()
            .verbose();

        assert_eq!(config.name(), "app-shell");
        assert_eq!(config.max_providers, Some(16));
        assert!(!config.precheck_cycles);
        assert!(config.is_verbose());
    }

    #[test]
    fn test_zero_limit_is_invalid() {
        let config = NestConfig::new().max_providers(0);
        assert_eq!(
            config.validate(),
            Err("max_providers must be greater than 0".to_string())
        );
    }
}
