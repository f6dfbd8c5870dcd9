//! # navroute
//!
//! A path router that picks the handler factory for an incoming path:
//! - Literal routes (`/about`) matched by exact string equality
//! - Pattern routes (`^/user/.*/settings$`) matched as full-string regexes
//! - Explicit "not routed" result (`None`) instead of a default handler
//!
//! ## Precedence
//!
//! 1. **Literal routes** win whenever the path is an exact key, even if a
//!    pattern would also match.
//! 2. **Pattern routes** are tried in registration order; the first one that
//!    matches the whole path wins. Duplicate patterns are allowed.
//! 3. Nothing matched: `resolve` returns `None` and `is_routed` returns false.
//!
//! Paths are used as given. No normalization, decoding, query string or
//! fragment handling happens here.
//!
//! ## Example
//!
//! ```
//! use navroute::Router;
//!
//! #[derive(Debug, PartialEq)]
//! enum Page {
//!     Home,
//!     Settings,
//! }
//!
//! let mut router = Router::new();
//! router.route("/", || Page::Home);
//! router.route_pattern("^/user/.*/settings$", || Page::Settings).unwrap();
//!
//! assert_eq!(router.resolve("/"), Some(Page::Home));
//! assert_eq!(router.resolve("/user/42/settings"), Some(Page::Settings));
//! assert!(!router.is_routed("/user/42/settings/"));
//! ```
//!
//! Routes can also be declared in a TOML route table and bound to named
//! factories, see [`RouteTable`] and [`HandlerRegistry`].

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
mod factory;
pub mod route;
mod router;
mod shared;

pub use config::{HandlerRegistry, LiteralRoute, PatternRoute, RouteTable};
pub use error::RouterError;
pub use factory::{DefaultFactory, Factory};
pub use route::{RouteKind, RouteMatch, RoutePattern};
pub use router::Router;
pub use shared::SharedRouter;
