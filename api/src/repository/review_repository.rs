// src/repository/review_repository.rs
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};

use super::Result;
use crate::models::review::Review;

#[rocket::async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: &Review) -> Result<()>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Review>>;
    /// Order of the result is unspecified.
    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Review>>;
    async fn delete(&self, id: &ObjectId) -> Result<bool>;
    async fn delete_many(&self, ids: &[ObjectId]) -> Result<u64>;
    async fn delete_all(&self) -> Result<u64>;
}

pub struct MongoReviewRepository {
    collection: Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(client: &Client, database: &str) -> Self {
        let db = client.database(database);
        let collection = db.collection::<Review>("reviews");
        MongoReviewRepository { collection }
    }
}

#[rocket::async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn insert(&self, review: &Review) -> Result<()> {
        self.collection.insert_one(review, None).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Review>> {
        Ok(self.collection.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Review>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let filter = doc! { "_id": { "$in": ids.to_vec() } };
        let cursor = self.collection.find(filter, None).await?;
        Ok(cursor.try_collect::<Vec<_>>().await?)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": *id }, None).await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_many(&self, ids: &[ObjectId]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let filter = doc! { "_id": { "$in": ids.to_vec() } };
        let result = self.collection.delete_many(filter, None).await?;
        Ok(result.deleted_count)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = self.collection.delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }
}
