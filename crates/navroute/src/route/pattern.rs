/// Compiled pattern routes
///
/// A `RoutePattern` keeps the caller's source text and a regex anchored at
/// both ends. Matching is always against the whole path: a pattern never
/// matches a substring, whether or not the caller wrote `^` and `$`.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use regex_syntax::hir::{Hir, Look};
use regex_syntax::Parser;

use crate::RouterError;

/// A regular expression that must match an entire path
///
/// # Examples
///
/// ```
/// use navroute::RoutePattern;
///
/// let pattern = RoutePattern::new("^/user/.*/settings$").unwrap();
/// assert!(pattern.is_full_match("/user/42/settings"));
/// assert!(!pattern.is_full_match("/user/42/settings/"));
///
/// // No anchors written, still a whole-path match
/// let pattern = RoutePattern::new("/a").unwrap();
/// assert!(!pattern.is_full_match("/ab"));
/// ```
#[derive(Clone)]
pub struct RoutePattern {
    source: String,
    anchored: Regex,
}

impl RoutePattern {
    /// Compiles `source` into a full-string matcher
    ///
    /// The source is parsed on its own and the anchors are added to the
    /// parsed expression rather than to the text, so inline flags and
    /// verbose-mode comments in the source cannot reach past them.
    pub fn new(source: &str) -> Result<Self, RouterError> {
        let invalid = |err: regex::Error| {
            tracing::warn!(pattern = %source, error = %err, "rejected route pattern");
            RouterError::InvalidPattern {
                pattern: source.to_string(),
                source: err,
            }
        };

        let hir = Parser::new()
            .parse(source)
            .map_err(|err| invalid(regex::Error::Syntax(err.to_string())))?;
        let hir = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        let anchored = Regex::new(&hir.to_string()).map_err(invalid)?;

        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    /// Returns true when the pattern matches all of `path`
    pub fn is_full_match(&self, path: &str) -> bool {
        self.anchored.is_match(path)
    }

    /// The pattern text as it was registered
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RoutePattern").field(&self.source).finish()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for RoutePattern {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
