//! Shared fixtures for navroute integration tests

#![allow(dead_code)]

use std::any::Any;

/// Handler type used across tests, compared by concrete type
pub type Handler = Box<dyn Any>;

#[derive(Debug, Default)]
pub struct RouteCompo;

#[derive(Debug, Default)]
pub struct RouteWithRegexpCompo;

#[derive(Debug, Default)]
pub struct OtherCompo;

pub fn route_compo() -> Handler {
    Box::new(RouteCompo)
}

pub fn route_with_regexp_compo() -> Handler {
    Box::new(RouteWithRegexpCompo)
}

pub fn other_compo() -> Handler {
    Box::new(OtherCompo)
}

/// Installs a test-writer subscriber so router events show up in failing tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
