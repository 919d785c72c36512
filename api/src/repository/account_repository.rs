// src/repository/account_repository.rs
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use super::{is_duplicate_key, RepositoryError, Result};
use crate::models::account::Account;

#[rocket::async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fails with [`RepositoryError::Duplicate`] when the username is taken.
    async fn insert(&self, account: &Account) -> Result<()>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Account>>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>>;
    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Account>>;
    async fn find_first(&self) -> Result<Option<Account>>;
}

pub struct MongoAccountRepository {
    collection: Collection<Account>,
}

impl MongoAccountRepository {
    pub fn new(client: &Client, database: &str) -> Self {
        let db = client.database(database);
        let collection = db.collection::<Account>("accounts");
        MongoAccountRepository { collection }
    }

    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index, None).await?;
        Ok(())
    }
}

#[rocket::async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn insert(&self, account: &Account) -> Result<()> {
        match self.collection.insert_one(account, None).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(RepositoryError::Duplicate("username")),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Account>> {
        Ok(self.collection.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        Ok(self.collection.find_one(doc! { "username": username }, None).await?)
    }

    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Account>> {
        let filter = doc! { "_id": { "$in": ids.to_vec() } };
        let cursor = self.collection.find(filter, None).await?;
        Ok(cursor.try_collect::<Vec<_>>().await?)
    }

    async fn find_first(&self) -> Result<Option<Account>> {
        Ok(self.collection.find_one(None, None).await?)
    }
}
