//! Topological ordering of a provider set.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::{ResolveError, ResolveResult};
use crate::provider::Node;

/// Sort providers so that every provider comes after all of its dependencies.
///
/// This is a depth-first post-order walk: top-level nodes in input order,
/// dependencies in declared order. Independent providers therefore keep
/// their relative input order, and the same input always yields the same
/// output.
///
/// Fails with [`ResolveError::UnknownDependency`] when a dependency name has
/// no provider, and with [`ResolveError::CycleDetected`] when the walk
/// re-enters a provider it is still visiting.
///
/// # Example
///
/// ```rust
/// use layerfold::{sort_providers, Node, ProviderNode};
///
/// let providers = vec![
///     ProviderNode::new("A", |s: String| s).depends_on("B"),
///     ProviderNode::new("B", |s: String| s).depends_on("C"),
///     ProviderNode::new("C", |s: String| s),
/// ];
///
/// let sorted = sort_providers(&providers).unwrap();
/// let names: Vec<&str> = sorted.iter().map(|p| p.name()).collect();
/// assert_eq!(names, vec!["C", "B", "A"]);
/// ```
pub fn sort_providers<N: Node>(providers: &[N]) -> ResolveResult<Vec<&N>> {
    let order = sorted_indices(providers)?;
    Ok(order.into_iter().map(|i| &providers[i]).collect())
}

/// Sort an owned provider set, moving each provider into its sorted position.
///
/// Same ordering and errors as [`sort_providers`].
pub fn into_sorted<N: Node>(providers: Vec<N>) -> ResolveResult<Vec<N>> {
    let order = sorted_indices(&providers)?;
    let mut slots: Vec<Option<N>> = providers.into_iter().map(Some).collect();
    Ok(order.into_iter().filter_map(|i| slots[i].take()).collect())
}

fn sorted_indices<N: Node>(providers: &[N]) -> ResolveResult<Vec<usize>> {
    // Lookups resolve to the first provider carrying a name.
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, provider) in providers.iter().enumerate() {
        index.entry(provider.name()).or_insert(i);
    }

    let mut sorter = Sorter {
        providers,
        index,
        visited: HashSet::new(),
        visiting: HashSet::new(),
        sorted: Vec::with_capacity(providers.len()),
    };
    for (i, provider) in providers.iter().enumerate() {
        if !sorter.visited.contains(provider.name()) {
            sorter.visit(i)?;
        }
    }

    debug!(providers = providers.len(), "sorted providers");
    Ok(sorter.sorted)
}

struct Sorter<'a, N> {
    providers: &'a [N],
    index: HashMap<&'a str, usize>,
    visited: HashSet<&'a str>,
    visiting: HashSet<&'a str>,
    sorted: Vec<usize>,
}

impl<'a, N: Node> Sorter<'a, N> {
    fn visit(&mut self, i: usize) -> ResolveResult<()> {
        let providers = self.providers;
        let provider = &providers[i];
        let name = provider.name();
        if self.visiting.contains(name) {
            return Err(ResolveError::cycle(name));
        }
        if self.visited.contains(name) {
            return Ok(());
        }

        self.visiting.insert(name);
        for dependency in provider.dependencies() {
            let j = *self
                .index
                .get(dependency.as_str())
                .ok_or_else(|| ResolveError::unknown(name, dependency))?;
            self.visit(j)?;
        }
        self.visiting.remove(name);
        self.visited.insert(name);

        trace!(provider = name, position = self.sorted.len(), "placed provider");
        self.sorted.push(i);
        Ok(())
    }
}
