/// Router shared between threads
///
/// `Router` has no internal locking. When routes are registered while other
/// threads are resolving, wrap it in a `SharedRouter`: registration takes the
/// write lock, lookups take the read lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::route::{RouteKind, RoutePattern};
use crate::{Factory, Router, RouterError};

/// Cloneable handle to a router behind a read-write lock
///
/// # Examples
///
/// ```
/// use navroute::{Router, SharedRouter};
///
/// let shared = SharedRouter::new(Router::new());
/// let writer = shared.clone();
///
/// std::thread::spawn(move || writer.route("/about", || "about"))
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.resolve("/about"), Some("about"));
/// ```
pub struct SharedRouter<H> {
    inner: Arc<RwLock<Router<H>>>,
}

impl<H> SharedRouter<H> {
    pub fn new(router: Router<H>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(router)),
        }
    }

    // Registration never leaves the maps half-written, so a poisoned lock
    // still guards a consistent router.
    fn read(&self) -> RwLockReadGuard<'_, Router<H>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Router<H>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a literal route
    pub fn route(&self, path: impl Into<String>, factory: impl Factory<H> + 'static) {
        self.write().route(path, factory);
    }

    /// Registers a pattern route
    ///
    /// The pattern is compiled before the write lock is taken.
    pub fn route_pattern(
        &self,
        pattern: &str,
        factory: impl Factory<H> + 'static,
    ) -> Result<(), RouterError> {
        let compiled = RoutePattern::new(pattern)?;
        self.write().route_pattern_shared(compiled, Arc::new(factory));
        Ok(())
    }

    pub fn is_routed(&self, path: &str) -> bool {
        self.read().is_routed(path)
    }

    /// Resolves `path` to a fresh handler
    ///
    /// The factory runs after the read lock is released, so it may register
    /// routes on this same router.
    pub fn resolve(&self, path: &str) -> Option<H> {
        let factory = self
            .read()
            .lookup(path)
            .map(|found| Arc::clone(found.factory()))?;
        Some(factory.create())
    }

    /// Which route `path` hits, as owned data
    pub fn lookup_kind(&self, path: &str) -> Option<(RouteKind, String)> {
        self.read()
            .lookup(path)
            .map(|found| (found.kind(), found.route().to_string()))
    }

    /// Copies the current routes into a standalone router
    pub fn snapshot(&self) -> Router<H> {
        self.read().clone()
    }
}

impl<H> Clone for SharedRouter<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H> Default for SharedRouter<H> {
    fn default() -> Self {
        Self::new(Router::new())
    }
}

impl<H> From<Router<H>> for SharedRouter<H> {
    fn from(router: Router<H>) -> Self {
        Self::new(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_concurrent_register_and_resolve() {
        let shared: SharedRouter<usize> = SharedRouter::default();

        let writers: Vec<_> = (0..4)
            .map(|i| {
                let router = shared.clone();
                thread::spawn(move || router.route(format!("/page/{}", i), move || i))
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        for i in 0..4 {
            assert_eq!(shared.resolve(&format!("/page/{}", i)), Some(i));
        }
    }

    #[test]
    fn test_pattern_registration() {
        let shared = SharedRouter::new(Router::new());
        shared.route_pattern("^/user/.*$", || "user").unwrap();
        assert!(shared.route_pattern("(", || "broken").is_err());

        assert_eq!(
            shared.lookup_kind("/user/7"),
            Some((RouteKind::Pattern { index: 0 }, "^/user/.*$".to_string()))
        );
        assert_eq!(shared.snapshot().pattern_count(), 1);
    }

    #[test]
    fn test_factory_can_register_routes() {
        let shared: SharedRouter<i32> = SharedRouter::default();
        let inner = shared.clone();
        shared.route("/lazy", move || {
            inner.route("/other", || 2);
            1
        });

        let (tx, rx) = mpsc::channel();
        let resolver = shared.clone();
        thread::spawn(move || {
            let _ = tx.send(resolver.resolve("/lazy"));
        });

        let resolved = rx.recv_timeout(Duration::from_secs(5));
        assert_eq!(resolved, Ok(Some(1)));
        assert_eq!(shared.resolve("/other"), Some(2));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let shared = SharedRouter::from(Router::new().with_route("/", || 0));
        let mut snapshot = shared.snapshot();
        snapshot.route("/extra", || 1);

        assert!(!shared.is_routed("/extra"));
        assert!(snapshot.is_routed("/extra"));
    }
}
