//! Recipe generation service and terminal client.
//!
//! One binary, two modes: the default mode hosts the HTTP generation
//! endpoint (`POST /api/generate-recipe`), `--tui` runs the interactive
//! terminal client that talks to it and keeps the saved-recipe collection
//! in a local file.

pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod server;
pub mod store;
pub mod tui;
