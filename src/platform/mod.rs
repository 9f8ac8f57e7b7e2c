//! Browser platform layer
//!
//! Thin wrappers over `web-sys` for DOM construction and layout
//! measurement. Listener and timer lifetimes are handled by `gloo`.

pub mod dom;

pub use dom::{el, measure, now_ms, set_position, text_el};
