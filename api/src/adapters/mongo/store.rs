//! Shared document store handle
//!
//! One handle per process. The connection is opened by whichever request
//! needs it first and reused afterwards; a failed attempt is not cached.

use mongodb::{bson::Document, options::ClientOptions, Client, Collection};
use tokio::sync::OnceCell;

use crate::error::DomainError;

/// Database used when neither the settings nor the URI name one
pub const DEFAULT_DATABASE: &str = "talent-portal";

/// Where the posts live
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub uri: String,
    /// Overrides the database named in the URI
    pub database: Option<String>,
    pub collection: String,
}

/// Lazily connected handle to the posts collection
pub struct MongoStore {
    settings: StoreSettings,
    posts: OnceCell<Collection<Document>>,
}

impl MongoStore {
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            settings,
            posts: OnceCell::new(),
        }
    }

    /// The posts collection, connecting on first use
    pub async fn posts(&self) -> Result<&Collection<Document>, DomainError> {
        self.posts.get_or_try_init(|| self.connect()).await
    }

    pub fn is_connected(&self) -> bool {
        self.posts.initialized()
    }

    async fn connect(&self) -> Result<Collection<Document>, DomainError> {
        tracing::info!("Connecting to document store...");

        let options = ClientOptions::parse(&self.settings.uri).await?;
        let database = self
            .settings
            .database
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let client = Client::with_options(options)?;

        tracing::info!(
            database = %database,
            collection = %self.settings.collection,
            "Document store ready"
        );

        Ok(client
            .database(&database)
            .collection::<Document>(&self.settings.collection))
    }
}
