//! huepick - dominant colors, Tailwind tokens and text contrast for images
//!
//! The color science lives in the `hue-engine` crate. This library wires it
//! to image decoding, the reference palette download, export formats and
//! the HTTP API, and exposes those modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
