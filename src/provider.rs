//! Provider traits and the closure-backed provider record.
//!
//! A provider is a named unit that declares the providers it depends on and
//! knows how to wrap a payload. Ordering only looks at the [`Node`] half;
//! composition calls [`Provider::wrap`].

use std::fmt;

/// A named entry in a dependency graph.
///
/// Every name returned by [`dependencies`](Node::dependencies) is expected to
/// match the [`name`](Node::name) of another node in the same set.
pub trait Node {
    /// Returns the name of this node, unique within its set.
    fn name(&self) -> &str;

    /// Returns the names of the nodes this node depends on, in declared order.
    fn dependencies(&self) -> &[String] {
        &[]
    }
}

/// A node that can wrap a payload.
///
/// Providers that others depend on end up further out: a provider's
/// dependencies all wrap around the result of its own `wrap`.
///
/// # Example
///
/// ```rust
/// use layerfold::{Node, Provider};
///
/// struct Brackets;
///
/// impl Node for Brackets {
///     fn name(&self) -> &str {
///         "brackets"
///     }
/// }
///
/// impl Provider<String> for Brackets {
///     fn wrap(&self, payload: String) -> String {
///         format!("[{}]", payload)
///     }
/// }
///
/// assert_eq!(Brackets.wrap("x".to_string()), "[x]");
/// ```
pub trait Provider<T>: Node {
    /// Wrap the payload, returning the wrapped value.
    fn wrap(&self, payload: T) -> T;
}

impl<N: Node + ?Sized> Node for Box<N> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn dependencies(&self) -> &[String] {
        (**self).dependencies()
    }
}

impl<N: Node + ?Sized> Node for &N {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn dependencies(&self) -> &[String] {
        (**self).dependencies()
    }
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for Box<P> {
    fn wrap(&self, payload: T) -> T {
        (**self).wrap(payload)
    }
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for &P {
    fn wrap(&self, payload: T) -> T {
        (**self).wrap(payload)
    }
}

type WrapFn<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// A provider built from a name, a dependency list and a wrapping closure.
///
/// # Example
///
/// ```rust
/// use layerfold::{Node, Provider, ProviderNode};
///
/// let theme = ProviderNode::new("Theme", |inner: String| format!("<theme>{}</theme>", inner))
///     .depends_on("Config");
///
/// assert_eq!(theme.dependencies(), &["Config".to_string()]);
/// assert_eq!(theme.wrap("app".to_string()), "<theme>app</theme>");
/// ```
pub struct ProviderNode<T> {
    name: String,
    dependencies: Vec<String>,
    wrap: WrapFn<T>,
}

impl<T> ProviderNode<T> {
    /// Create a provider with no dependencies.
    pub fn new<F>(name: impl Into<String>, wrap: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            wrap: Box::new(wrap),
        }
    }

    /// Add a dependency.
    pub fn depends_on(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    /// Add several dependencies, keeping their order.
    pub fn with_dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(names.into_iter().map(Into::into));
        self
    }
}

impl<T> Node for ProviderNode<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

impl<T> Provider<T> for ProviderNode<T> {
    fn wrap(&self, payload: T) -> T {
        (self.wrap)(payload)
    }
}

impl<T> fmt::Debug for ProviderNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderNode")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}
