//! Application layer
//!
//! Contains the feed query use cases and the normalization they rely on.

pub mod feed_service;
pub mod normalize;

pub use feed_service::FeedService;
pub use normalize::normalize_post;
