pub mod account_repository;
pub mod listing_repository;
pub mod memory;
pub mod review_repository;

use std::sync::Arc;

use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Client;
use thiserror::Error;
use tracing::info;

pub use account_repository::{AccountRepository, MongoAccountRepository};
pub use listing_repository::{ListingRepository, MongoListingRepository};
pub use review_repository::{MongoReviewRepository, ReviewRepository};

use crate::config::{mongo_config::setup_mongo, AppConfig, StoreKind};
use memory::{MemoryAccountRepository, MemoryListingRepository, MemoryReviewRepository};

const DUPLICATE_KEY: i32 = 11000;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("{0} already exists")]
    Duplicate(&'static str),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

/// The three collections the app works with, behind trait objects so the
/// routes never know which store backs them.
#[derive(Clone)]
pub struct Repositories {
    pub accounts: Arc<dyn AccountRepository>,
    pub listings: Arc<dyn ListingRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
}

impl Repositories {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        match config.store {
            StoreKind::Mongo => {
                let client = setup_mongo(&config.mongo_uri, "hotels-api").await?;
                let repos = Repositories::mongo(&client, &config.database).await?;
                info!("Connected to MongoDB database {}", config.database);
                Ok(repos)
            }
            StoreKind::Memory => {
                info!("Using the in-memory store, records are lost on shutdown");
                Ok(Repositories::in_memory())
            }
        }
    }

    pub async fn mongo(client: &Client, database: &str) -> Result<Self> {
        let accounts = MongoAccountRepository::new(client, database);
        accounts.ensure_indexes().await?;

        Ok(Repositories {
            accounts: Arc::new(accounts),
            listings: Arc::new(MongoListingRepository::new(client, database)),
            reviews: Arc::new(MongoReviewRepository::new(client, database)),
        })
    }

    pub fn in_memory() -> Self {
        Repositories {
            accounts: Arc::new(MemoryAccountRepository::default()),
            listings: Arc::new(MemoryListingRepository::default()),
            reviews: Arc::new(MemoryReviewRepository::default()),
        }
    }
}
