/// Route module
///
/// Compiled pattern keys and the result type describing which registered
/// route a path resolved to.

use std::fmt;
use std::sync::Arc;

use crate::Factory;

pub mod pattern;

pub use pattern::RoutePattern;

/// Which registry tier produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Exact string equality with a literal route
    Literal,
    /// Full-string match against the pattern at `index` (registration order)
    Pattern { index: usize },
}

/// A successful lookup: the route that matched and its factory
///
/// Borrowed from the router, so nothing is constructed until
/// [`RouteMatch::create`] is called.
pub struct RouteMatch<'r, H> {
    kind: RouteKind,
    route: &'r str,
    factory: &'r Arc<dyn Factory<H>>,
}

impl<'r, H> RouteMatch<'r, H> {
    pub(crate) fn new(
        kind: RouteKind,
        route: &'r str,
        factory: &'r Arc<dyn Factory<H>>,
    ) -> Self {
        Self {
            kind,
            route,
            factory,
        }
    }

    /// Tier that matched
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// The literal path or pattern source that matched
    pub fn route(&self) -> &'r str {
        self.route
    }

    /// True when the match came from the literal registry
    pub fn is_literal(&self) -> bool {
        self.kind == RouteKind::Literal
    }

    /// Invokes the route's factory for a fresh handler
    pub fn create(&self) -> H {
        self.factory.create()
    }

    pub(crate) fn factory(&self) -> &'r Arc<dyn Factory<H>> {
        self.factory
    }
}

impl<H> fmt::Debug for RouteMatch<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("kind", &self.kind)
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}
