/// Handler factories
///
/// A factory is the only thing the router knows about a handler: it can be
/// asked for a fresh instance. Closures work out of the box through the
/// blanket implementation, and [`DefaultFactory`] covers handlers that are
/// just `T::default()`.

use std::fmt;
use std::marker::PhantomData;

/// Produces a new handler instance on every call
///
/// # Examples
///
/// ```
/// use navroute::Factory;
///
/// let factory = || String::from("home");
/// assert_eq!(factory.create(), "home");
/// ```
pub trait Factory<H>: Send + Sync {
    /// Creates a fresh handler. Must not hand out a shared singleton.
    fn create(&self) -> H;
}

impl<H, F> Factory<H> for F
where
    F: Fn() -> H + Send + Sync + 'static,
{
    fn create(&self) -> H {
        self()
    }
}

/// Factory that builds handlers with `T::default()`
///
/// # Examples
///
/// ```
/// use navroute::{DefaultFactory, Router};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct About;
///
/// let router = Router::new().with_route("/about", DefaultFactory::<About>::new());
/// assert_eq!(router.resolve("/about"), Some(About));
/// ```
pub struct DefaultFactory<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> DefaultFactory<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for DefaultFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DefaultFactory<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DefaultFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DefaultFactory<{}>", std::any::type_name::<T>())
    }
}

impl<T: Default + 'static> Factory<T> for DefaultFactory<T> {
    fn create(&self) -> T {
        T::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_closure_factory_called_each_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let factory = move || counter.fetch_add(1, Ordering::SeqCst);

        assert_eq!(factory.create(), 0);
        assert_eq!(factory.create(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_default_factory() {
        let factory = DefaultFactory::<Vec<u8>>::new();
        let mut first = factory.create();
        first.push(1);

        // Each call gets its own instance
        assert!(factory.create().is_empty());
    }

    #[test]
    fn test_default_factory_debug() {
        let factory = DefaultFactory::<u32>::default();
        assert_eq!(format!("{:?}", factory), "DefaultFactory<u32>");
    }
}
