//! HTTP API: configuration, routing, and request/response mapping over the record store.

pub mod app;
pub mod config;
