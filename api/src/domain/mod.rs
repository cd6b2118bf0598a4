//! Domain layer
//!
//! Contains the post model and the ports the rest of the system reads through.
//! - `entities`: Normalized, display-ready models
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
