//! HTTP handlers
//!
//! Axum request handlers for the JSON API and the rendered pages.

pub mod pages;
pub mod posts;

pub use pages::{feed_page, not_found_page, student_page};
pub use posts::{get_post, list_posts};
