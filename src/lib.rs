//! node-help library
//!
//! Keeps a local mirror of the Node.js documentation fresh and renders entries
//! from it. The binary is a thin wrapper; integration tests use these modules
//! directly.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod search;
pub mod ui;
