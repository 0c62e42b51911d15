//! # Layerfold
//!
//! **Layerfold** orders named, interdependent providers and folds them into a
//! single wrapper around a payload.
//!
//! ## Overview
//!
//! Each provider has a name, the names of the providers it depends on, and a
//! `wrap` operation. Resolution runs in three steps:
//!
//! ```text
//! detect_cycles   - fail fast on any dependency cycle
//! sort_providers  - dependencies before dependents; unknown names and cycles fail
//! compose         - last sorted provider wraps the payload, first ends outermost
//! ```
//!
//! A provider's dependencies therefore always wrap around it: given
//! `A -> [B]`, `B -> [C]`, the result is `C(B(A(payload)))`.
//!
//! ## Quick Start
//!
//! ```rust
//! use layerfold::prelude::*;
//!
//! let providers = vec![
//!     ProviderNode::new("Auth", |s: String| format!("<auth>{}</auth>", s)).depends_on("Theme"),
//!     ProviderNode::new("Theme", |s: String| format!("<theme>{}</theme>", s)).depends_on("Config"),
//!     ProviderNode::new("Config", |s: String| format!("<config>{}</config>", s)),
//! ];
//!
//! let wrapped = nest(&providers, "app".to_string()).unwrap();
//! assert_eq!(wrapped, "<config><theme><auth>app</auth></theme></config>");
//! ```
//!
//! ## Features
//!
//! - `Node` / `Provider` traits, with a closure-backed `ProviderNode`
//! - Standalone cycle detection and deterministic topological sorting
//! - `Nest` for resolving once and wrapping many payloads
//! - `tracing` events for resolution and wrapping; no subscriber is installed
//!
//! Resolution recurses once per dependency level, so very deep provider
//! chains can exhaust the stack. `NestConfig::max_providers` caps set size
//! for callers that accept untrusted input.

mod compose;
mod config;
mod detect;
mod error;
mod nest;
mod provider;
mod sort;

pub mod prelude;

// Re-export core types
pub use compose::{compose, nest};
pub use config::{Config, NestConfig};
pub use detect::detect_cycles;
pub use error::{LayerfoldError, LayerfoldResult, ResolveError, ResolveResult};
pub use nest::{BoxedProvider, Nest, NestBuilder};
pub use provider::{Node, Provider, ProviderNode};
pub use sort::{into_sorted, sort_providers};
