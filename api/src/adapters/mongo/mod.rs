//! MongoDB adapters
//!
//! Implementations of repository traits using the official MongoDB driver.

pub mod post_repo;
pub mod store;


pub use post_repo::MongoPostRepository;
pub use store::{MongoStore, StoreSettings, DEFAULT_DATABASE};
