//! Folding a sorted provider sequence around a payload.

use tracing::{debug, trace};

use crate::detect::detect_cycles;
use crate::error::ResolveResult;
use crate::provider::Provider;
use crate::sort::sort_providers;

/// Wrap `payload` in every provider of an already sorted sequence.
///
/// The last provider wraps the payload first and the first provider ends up
/// outermost, so sorted `[C, B, A]` yields `C.wrap(B.wrap(A.wrap(payload)))`.
/// Each `wrap` runs exactly once. An empty sequence returns the payload as is.
///
/// # Example
///
/// ```rust
/// use layerfold::{compose, ProviderNode};
///
/// let sorted = vec![
///     ProviderNode::new("C", |s: String| format!("C({})", s)),
///     ProviderNode::new("B", |s: String| format!("B({})", s)),
/// ];
///
/// assert_eq!(compose(&sorted, "leaf".to_string()), "C(B(leaf))");
/// ```
pub fn compose<T, P: Provider<T>>(sorted: &[P], payload: T) -> T {
    fold(sorted, payload, false)
}

/// Order `providers` by their dependencies and wrap `payload` in them.
///
/// Runs the cycle check, then the sort, then [`compose`]. The first error
/// from either step is returned and no provider is invoked.
///
/// # Example
///
/// ```rust
/// use layerfold::{nest, ProviderNode};
///
/// let providers = vec![
///     ProviderNode::new("A", |s: String| format!("A({})", s)).depends_on("B"),
///     ProviderNode::new("B", |s: String| format!("B({})", s)).depends_on("C"),
///     ProviderNode::new("C", |s: String| format!("C({})", s)),
/// ];
///
/// assert_eq!(nest(&providers, "leaf".to_string()).unwrap(), "C(B(A(leaf)))");
/// ```
pub fn nest<T, P: Provider<T>>(providers: &[P], payload: T) -> ResolveResult<T> {
    detect_cycles(providers)?;
    let sorted = sort_providers(providers)?;
    Ok(compose(&sorted, payload))
}

pub(crate) fn fold<T, P: Provider<T>>(sorted: &[P], payload: T, verbose: bool) -> T {
    let wrapped = sorted.iter().rev().fold(payload, |inner, provider| {
        if verbose {
            debug!(provider = provider.name(), "wrapping");
        } else {
            trace!(provider = provider.name(), "wrapping");
        }
        provider.wrap(inner)
    });
    trace!(layers = sorted.len(), "composed payload");
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::provider::ProviderNode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn tag(name: &'static str) -> ProviderNode<String> {
        ProviderNode::new(name, move |inner: String| format!("{}({})", name, inner))
    }

    #[test]
    fn test_compose_innermost_first() {
        let sorted = vec![tag("C"), tag("B"), tag("A")];
        assert_eq!(compose(&sorted, "X".to_string()), "C(B(A(X)))");
    }

    #[test]
    fn test_compose_empty_returns_payload() {
        let sorted: Vec<ProviderNode<String>> = Vec::new();
        assert_eq!(compose(&sorted, "leaf".to_string()), "leaf");
    }

    #[test]
    fn test_compose_invokes_each_wrap_once_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let count = Arc::new(AtomicUsize::new(0));

        let recorder = |name: &'static str| {
            let calls = Arc::clone(&calls);
            let count = Arc::clone(&count);
            ProviderNode::new(name, move |depth: u32| {
                calls.lock().unwrap().push(name);
                count.fetch_add(1, Ordering::SeqCst);
                depth + 1
            })
        };
        let sorted = vec![recorder("Outer"), recorder("Middle"), recorder("Inner")];

        assert_eq!(compose(&sorted, 0), 3);
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(*calls.lock().unwrap(), vec!["Inner", "Middle", "Outer"]);
    }

    #[test]
    fn test_nest_chain() {
        let providers = vec![
            tag("A").depends_on("B"),
            tag("B").depends_on("C"),
            tag("C"),
        ];
        assert_eq!(
            nest(&providers, "leaf".to_string()).unwrap(),
            "C(B(A(leaf)))"
        );
    }

    #[test]
    fn test_nest_cycle() {
        let providers = vec![tag("A").depends_on("B"), tag("B").depends_on("A")];
        assert_eq!(
            nest(&providers, "leaf".to_string()),
            Err(ResolveError::CycleDetected {
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn test_nest_unknown_dependency() {
        let providers = vec![tag("A").depends_on("Missing")];
        assert_eq!(
            nest(&providers, "leaf".to_string()),
            Err(ResolveError::UnknownDependency {
                provider: "A".to_string(),
                dependency: "Missing".to_string(),
            })
        );
    }

    #[test]
    fn test_nest_error_skips_wraps() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let providers = vec![
            ProviderNode::new("A", move |s: String| {
                counter.fetch_add(1, Ordering::SeqCst);
                s
            }),
            tag("B").depends_on("B"),
        ];

        assert!(nest(&providers, "leaf".to_string()).is_err());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
