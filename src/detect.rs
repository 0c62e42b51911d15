//! Cycle detection over a provider set.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::{ResolveError, ResolveResult};
use crate::provider::Node;

/// Check a provider set for dependency cycles, including self-dependencies.
///
/// Nodes are walked depth-first in input order, dependencies in declared
/// order. The error names the first node re-entered while still on the
/// current path. Dependencies on names outside the set are skipped here;
/// [`sort_providers`](crate::sort_providers) reports those.
///
/// # Example
///
/// ```rust
/// use layerfold::{detect_cycles, ProviderNode, ResolveError};
///
/// let providers = vec![
///     ProviderNode::new("A", |s: String| s).depends_on("B"),
///     ProviderNode::new("B", |s: String| s).depends_on("A"),
/// ];
///
/// assert_eq!(
///     detect_cycles(&providers),
///     Err(ResolveError::CycleDetected { name: "A".to_string() })
/// );
/// ```
pub fn detect_cycles<N: Node>(providers: &[N]) -> ResolveResult<()> {
    // A repeated name keeps its first position and takes the last dependency list.
    let mut dependency_map: HashMap<&str, &[String]> = HashMap::new();
    let mut ordered: Vec<&str> = Vec::new();
    for provider in providers {
        let name = provider.name();
        if dependency_map.insert(name, provider.dependencies()).is_none() {
            ordered.push(name);
        }
    }

    let mut detector = Detector {
        dependency_map,
        visited: HashSet::new(),
        visiting: HashSet::new(),
    };
    for name in ordered {
        detector.visit(name)?;
    }

    debug!(providers = providers.len(), "no circular dependencies");
    Ok(())
}

struct Detector<'a> {
    dependency_map: HashMap<&'a str, &'a [String]>,
    visited: HashSet<&'a str>,
    visiting: HashSet<&'a str>,
}

impl<'a> Detector<'a> {
    fn visit(&mut self, name: &'a str) -> ResolveResult<()> {
        if self.visiting.contains(name) {
            return Err(ResolveError::cycle(name));
        }
        if self.visited.contains(name) {
            return Ok(());
        }

        trace!(provider = name, "checking dependencies");
        self.visiting.insert(name);
        if let Some(dependencies) = self.dependency_map.get(name).copied() {
            for dependency in dependencies {
                self.visit(dependency)?;
            }
        }
        self.visiting.remove(name);
        self.visited.insert(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderNode;

    fn provider(name: &str, dependencies: &[&str]) -> ProviderNode<()> {
        ProviderNode::new(name, |unit: ()| unit).with_dependencies(dependencies.iter().copied())
    }

    fn cycle(name: &str) -> ResolveResult<()> {
        Err(ResolveError::CycleDetected {
            name: name.to_string(),
        })
    }

    #[test]
    fn test_no_dependencies() {
        let providers = vec![provider("A", &[]), provider("B", &[]), provider("C", &[])];
        assert!(detect_cycles(&providers).is_ok());
    }

    #[test]
    fn test_valid_chain() {
        let providers = vec![
            provider("A", &["B"]),
            provider("B", &["C"]),
            provider("C", &[]),
        ];
        assert!(detect_cycles(&providers).is_ok());
    }

    #[test]
    fn test_three_node_cycle() {
        let providers = vec![
            provider("A", &["B"]),
            provider("B", &["C"]),
            provider("C", &["A"]),
        ];
        assert_eq!(detect_cycles(&providers), cycle("A"));
    }

    #[test]
    fn test_self_dependency() {
        let providers = vec![provider("A", &["A"])];
        assert_eq!(detect_cycles(&providers), cycle("A"));
    }

    #[test]
    fn test_four_node_cycle() {
        let providers = vec![
            provider("A", &["B"]),
            provider("B", &["C"]),
            provider("C", &["D"]),
            provider("D", &["A"]),
        ];
        assert_eq!(detect_cycles(&providers), cycle("A"));
    }

    #[test]
    fn test_independent_components() {
        let providers = vec![
            provider("A", &["B"]),
            provider("B", &[]),
            provider("C", &[]),
            provider("D", &["C"]),
        ];
        assert!(detect_cycles(&providers).is_ok());
    }

    #[test]
    fn test_cycle_in_later_component() {
        // The walk starts at "Solo", then enters the cycle through "X".
        let providers = vec![
            provider("Solo", &[]),
            provider("Y", &["X"]),
            provider("X", &["Y"]),
        ];
        assert_eq!(detect_cycles(&providers), cycle("Y"));
    }

    #[test]
    fn test_unknown_dependency_is_ignored() {
        let providers = vec![provider("A", &["Missing"])];
        assert!(detect_cycles(&providers).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let providers: Vec<ProviderNode<()>> = Vec::new();
        assert!(detect_cycles(&providers).is_ok());
    }
}
