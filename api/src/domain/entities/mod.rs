//! Domain entities
//!
//! Display-ready models. Raw stored documents never leave the adapter and
//! normalization layers.

pub mod post;

pub use post::{LinkKind, MediaAsset, Post, PostId, POST_ID_LEN};
