//! HTTP front end: configuration, routing, and page rendering.

pub mod app;
pub mod config;
