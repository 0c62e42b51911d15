//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! from Layerfold for convenient glob imports.
//!
//! # Example
//!
//! ```rust
//! use layerfold::prelude::*;
//! ```

// Configuration
pub use crate::config::{Config, NestConfig};

// Core traits
pub use crate::provider::{Node, Provider, ProviderNode};

// Resolution
pub use crate::compose::{compose, nest};
pub use crate::detect::detect_cycles;
pub use crate::sort::{into_sorted, sort_providers};

// Nest
pub use crate::nest::{BoxedProvider, Nest, NestBuilder};

// Errors
pub use crate::error::{LayerfoldError, LayerfoldResult, ResolveError, ResolveResult};
