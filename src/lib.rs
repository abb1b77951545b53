//! ToolKit Palette
//!
//! Color extraction, palette generation and export behind an HTTP API and a
//! command-line front end. The color math lives in the `swatch` crate; this
//! crate adds image decoding, saved palettes and the service layer.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
