/// Two-tier router
///
/// Literal routes live in a `HashMap` keyed by the exact path, pattern routes
/// in a `Vec` kept in registration order. Lookups check the literal map
/// first and only fall through to the patterns on a miss, so an exact route
/// always beats any pattern that would also match.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::route::{RouteKind, RouteMatch, RoutePattern};
use crate::{Factory, RouterError};

/// Maps paths to handler factories
///
/// `H` is whatever the registered factories produce. The router never looks
/// inside handlers or factories; it only stores them and calls
/// [`Factory::create`] when a path resolves.
///
/// # Examples
///
/// ```
/// use navroute::Router;
///
/// let mut router = Router::new();
/// router.route("/abc", || "exact");
/// router.route_pattern("^/a.*$", || "pattern").unwrap();
///
/// assert_eq!(router.resolve("/abc"), Some("exact"));
/// assert_eq!(router.resolve("/ab"), Some("pattern"));
/// assert_eq!(router.resolve("/goodbye"), None);
/// ```
pub struct Router<H> {
    literals: HashMap<String, Arc<dyn Factory<H>>>,
    patterns: Vec<(RoutePattern, Arc<dyn Factory<H>>)>,
}

impl<H> Router<H> {
    /// Creates an empty router
    pub fn new() -> Self {
        Self {
            literals: HashMap::new(),
            patterns: Vec::new(),
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Registers a literal route
    ///
    /// Any string is accepted, including `""`. Registering the same path
    /// again replaces the earlier factory.
    pub fn route(&mut self, path: impl Into<String>, factory: impl Factory<H> + 'static) {
        self.route_shared(path.into(), Arc::new(factory));
    }

    /// Registers a pattern route
    ///
    /// The pattern must match a whole path to route it. Patterns are tried
    /// in the order they were registered; the first match wins. On an
    /// invalid pattern the router is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use navroute::Router;
    ///
    /// let mut router: Router<&str> = Router::new();
    /// assert!(router.route_pattern("^/user/(", || "user").is_err());
    /// assert!(router.is_empty());
    /// ```
    pub fn route_pattern(
        &mut self,
        pattern: &str,
        factory: impl Factory<H> + 'static,
    ) -> Result<(), RouterError> {
        let compiled = RoutePattern::new(pattern)?;
        self.route_pattern_shared(compiled, Arc::new(factory));
        Ok(())
    }

    pub(crate) fn route_shared(&mut self, path: String, factory: Arc<dyn Factory<H>>) {
        tracing::debug!(path = %path, "registering literal route");
        if self.literals.insert(path, factory).is_some() {
            tracing::debug!("literal route replaced an existing entry");
        }
    }

    pub(crate) fn route_pattern_shared(
        &mut self,
        pattern: RoutePattern,
        factory: Arc<dyn Factory<H>>,
    ) {
        tracing::debug!(
            pattern = %pattern,
            index = self.patterns.len(),
            "registering pattern route"
        );
        self.patterns.push((pattern, factory));
    }

    // ========================================================================
    // Functional Builder Methods
    // ========================================================================

    /// Adds a literal route (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use navroute::Router;
    ///
    /// let router = Router::new()
    ///     .with_route("/", || "home")
    ///     .with_route("/about", || "about");
    ///
    /// assert_eq!(router.literal_count(), 2);
    /// ```
    pub fn with_route(
        mut self,
        path: impl Into<String>,
        factory: impl Factory<H> + 'static,
    ) -> Self {
        self.route(path, factory);
        self
    }

    /// Adds a pattern route (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use navroute::Router;
    ///
    /// let router = Router::new()
    ///     .with_pattern("^/color/(red|green|blue)$", || "color")?
    ///     .with_pattern("^/user/.*/settings$", || "settings")?;
    ///
    /// assert_eq!(router.resolve("/color/red"), Some("color"));
    /// # Ok::<(), navroute::RouterError>(())
    /// ```
    pub fn with_pattern(
        mut self,
        pattern: &str,
        factory: impl Factory<H> + 'static,
    ) -> Result<Self, RouterError> {
        self.route_pattern(pattern, factory)?;
        Ok(self)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Finds the route for `path` without constructing a handler
    ///
    /// This is the single lookup used by both [`Router::is_routed`] and
    /// [`Router::resolve`].
    ///
    /// # Examples
    ///
    /// ```
    /// use navroute::{RouteKind, Router};
    ///
    /// let router = Router::new()
    ///     .with_pattern("^/a.*$", || "first")?
    ///     .with_pattern("^/ab$", || "second")?;
    ///
    /// let found = router.lookup("/ab").unwrap();
    /// assert_eq!(found.kind(), RouteKind::Pattern { index: 0 });
    /// assert_eq!(found.route(), "^/a.*$");
    /// # Ok::<(), navroute::RouterError>(())
    /// ```
    pub fn lookup(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        if let Some((route, factory)) = self.literals.get_key_value(path) {
            tracing::trace!(path, "literal route matched");
            return Some(RouteMatch::new(RouteKind::Literal, route, factory));
        }

        let found = self
            .patterns
            .iter()
            .enumerate()
            .find(|(_, (pattern, _))| pattern.is_full_match(path))
            .map(|(index, (pattern, factory))| {
                tracing::trace!(path, pattern = %pattern, index, "pattern route matched");
                RouteMatch::new(RouteKind::Pattern { index }, pattern.as_str(), factory)
            });

        if found.is_none() {
            tracing::trace!(path, "no route matched");
        }
        found
    }

    /// Returns true if `path` would resolve to a handler
    pub fn is_routed(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Resolves `path` to a fresh handler, or `None` when nothing matches
    pub fn resolve(&self, path: &str) -> Option<H> {
        self.lookup(path).map(|found| found.create())
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of literal routes
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// Number of pattern routes, duplicates included
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Total number of registered routes
    pub fn len(&self) -> usize {
        self.literal_count() + self.pattern_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered literal paths, in no particular order
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.literals.keys().map(String::as_str)
    }

    /// Registered patterns in the order they are tried
    pub fn patterns(&self) -> impl Iterator<Item = &RoutePattern> {
        self.patterns.iter().map(|(pattern, _)| pattern)
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for Router<H> {
    fn clone(&self) -> Self {
        Self {
            literals: self.literals.clone(),
            patterns: self.patterns.clone(),
        }
    }
}

impl<H> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut literals: Vec<&str> = self.literals().collect();
        literals.sort_unstable();

        f.debug_struct("Router")
            .field("literals", &literals)
            .field("patterns", &self.patterns().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_router() {
        let router: Router<&str> = Router::new();
        assert!(router.is_empty());
        assert_eq!(router.resolve(""), None);
        assert!(!router.is_routed("/goodbye"));
    }

    #[test]
    fn test_literal_overwrite() {
        let mut router = Router::new();
        router.route("/a", || 1);
        router.route("/a", || 2);

        assert_eq!(router.literal_count(), 1);
        assert_eq!(router.resolve("/a"), Some(2));
    }

    #[test]
    fn test_duplicate_patterns_are_kept() {
        let router = Router::new()
            .with_pattern("^/a$", || 1)
            .unwrap()
            .with_pattern("^/a$", || 2)
            .unwrap();

        assert_eq!(router.pattern_count(), 2);
        assert_eq!(router.resolve("/a"), Some(1));
    }

    #[test]
    fn test_lookup_reports_literal() {
        let router = Router::new()
            .with_route("/abc", || 0)
            .with_pattern("^/a.*$", || 1)
            .unwrap();

        let found = router.lookup("/abc").unwrap();
        assert!(found.is_literal());
        assert_eq!(found.route(), "/abc");
        assert_eq!(found.create(), 0);
    }

    // No bounds on H beyond what Router itself declares
    fn resolve_both<H>(
        router: &Router<H>,
        first: &str,
        second: &str,
    ) -> (Option<H>, Option<H>) {
        (router.resolve(first), router.resolve(second))
    }

    #[test]
    fn test_resolve_through_generic_handler() {
        let router = Router::new().with_route("/", || vec![1u8]);

        assert_eq!(resolve_both(&router, "/", "/missing"), (Some(vec![1u8]), None));
        assert!(router.lookup("/").map(|found| found.create()).is_some());
    }

    #[test]
    fn test_clone_shares_factories() {
        let router = Router::new().with_route("/", || "home");
        let copy = router.clone();

        assert_eq!(copy.resolve("/"), Some("home"));
        assert_eq!(router.resolve("/"), Some("home"));
    }

    #[test]
    fn test_debug_lists_routes() {
        let router = Router::new()
            .with_route("/b", || ())
            .with_route("/a", || ())
            .with_pattern("^/c.*$", || ())
            .unwrap();

        assert_eq!(
            format!("{:?}", router),
            r#"Router { literals: ["/a", "/b"], patterns: [RoutePattern("^/c.*$")] }"#
        );
    }
}
