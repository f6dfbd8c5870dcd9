// File: src/config.rs
// Purpose: Declarative route tables loaded from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::{Factory, RoutePattern, Router, RouterError};

/// Route table as written in a routes file
///
/// ```toml
/// [[literal]]
/// path = "/"
/// handler = "home"
///
/// [[pattern]]
/// pattern = "^/user/.*/settings$"
/// handler = "settings"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RouteTable {
    #[serde(default, rename = "literal")]
    pub literals: Vec<LiteralRoute>,

    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternRoute>,
}

/// Exact path mapped to a named handler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LiteralRoute {
    pub path: String,
    pub handler: String,
}

/// Regex mapped to a named handler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatternRoute {
    pub pattern: String,
    pub handler: String,
}

impl RouteTable {
    /// Load a route table from a TOML file
    ///
    /// A missing or blank file yields an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = ?path, "route table not found, using empty table");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse route table: {:?}", path))
    }

    /// Parse a route table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let table: RouteTable = toml::from_str(content).context("Invalid route table TOML")?;
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.literals.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a router, looking up each entry's handler in `handlers`
    ///
    /// Literals are registered in table order (a repeated path keeps the
    /// last entry), then patterns in table order. Every handler name and
    /// pattern is checked before anything is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use navroute::{HandlerRegistry, RouteTable};
    ///
    /// let table = RouteTable::from_toml_str(r#"
    ///     [[literal]]
    ///     path = "/"
    ///     handler = "home"
    ///
    ///     [[pattern]]
    ///     pattern = "^/color/(red|green|blue)$"
    ///     handler = "color"
    /// "#).unwrap();
    ///
    /// let handlers = HandlerRegistry::new()
    ///     .with_handler("home", || "home page")
    ///     .with_handler("color", || "color page");
    ///
    /// let router = table.build(&handlers).unwrap();
    /// assert_eq!(router.resolve("/color/blue"), Some("color page"));
    /// ```
    pub fn build<H>(&self, handlers: &HandlerRegistry<H>) -> Result<Router<H>, RouterError> {
        let mut router = Router::new();

        for entry in &self.literals {
            let factory = handlers.require(&entry.path, &entry.handler)?;
            router.route_shared(entry.path.clone(), factory);
        }

        for entry in &self.patterns {
            let factory = handlers.require(&entry.pattern, &entry.handler)?;
            let pattern = RoutePattern::new(&entry.pattern)?;
            router.route_pattern_shared(pattern, factory);
        }

        tracing::debug!(
            literals = router.literal_count(),
            patterns = router.pattern_count(),
            "built router from route table"
        );
        Ok(router)
    }
}

/// Named handler factories referenced by a [`RouteTable`]
pub struct HandlerRegistry<H> {
    factories: HashMap<String, Arc<dyn Factory<H>>>,
}

impl<H> HandlerRegistry<H> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under `name`, replacing any earlier one
    pub fn register(&mut self, name: impl Into<String>, factory: impl Factory<H> + 'static) {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Register a factory (functional builder)
    pub fn with_handler(
        mut self,
        name: impl Into<String>,
        factory: impl Factory<H> + 'static,
    ) -> Self {
        self.register(name, factory);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Factory<H>> {
        self.factories.get(name).map(|factory| &**factory)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn require(&self, route: &str, handler: &str) -> Result<Arc<dyn Factory<H>>, RouterError> {
        self.factories
            .get(handler)
            .cloned()
            .ok_or_else(|| RouterError::UnknownHandler {
                route: route.to_string(),
                handler: handler.to_string(),
            })
    }
}

impl<H> Default for HandlerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for HandlerRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.factories.keys().collect();
        names.sort_unstable();
        f.debug_struct("HandlerRegistry").field("handlers", &names).finish()
    }
}
