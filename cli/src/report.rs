//! Plain-text and HTML renderings written to stdout.
//!
//! Renderers return `String`s so commands decide where they go and tests can
//! compare them directly.

pub mod html;
pub mod ports;
pub mod targets;
