//! HTTP API for the item store: routing, request/response mapping, config.

pub mod app;
pub mod config;
pub mod middleware;
