// Library root: re-exports all modules so integration tests can reach the
// crate's public API.

pub mod app;
pub mod config;
pub mod feed;
pub mod tui;
