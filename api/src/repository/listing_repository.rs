// src/repository/listing_repository.rs
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};

use super::Result;
use crate::models::listing::{Listing, ListingFields};

#[rocket::async_trait]
pub trait ListingRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Listing>>;
    async fn insert(&self, listing: &Listing) -> Result<()>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Listing>>;
    /// Returns false when no listing has the id.
    async fn update_fields(&self, id: &ObjectId, fields: &ListingFields) -> Result<bool>;
    /// Removes the listing and hands back what was removed.
    async fn delete(&self, id: &ObjectId) -> Result<Option<Listing>>;
    async fn push_review(&self, id: &ObjectId, review_id: &ObjectId) -> Result<bool>;
    async fn pull_review(&self, id: &ObjectId, review_id: &ObjectId) -> Result<bool>;
    async fn delete_all(&self) -> Result<u64>;
}

pub struct MongoListingRepository {
    collection: Collection<Listing>,
}

impl MongoListingRepository {
    pub fn new(client: &Client, database: &str) -> Self {
        let db = client.database(database);
        let collection = db.collection::<Listing>("listings");
        MongoListingRepository { collection }
    }
}

#[rocket::async_trait]
impl ListingRepository for MongoListingRepository {
    async fn find_all(&self) -> Result<Vec<Listing>> {
        let mut cursor = self.collection.find(None, None).await?;
        let mut listings = Vec::new();
        while let Some(listing) = cursor.try_next().await? {
            listings.push(listing);
        }
        Ok(listings)
    }

    async fn insert(&self, listing: &Listing) -> Result<()> {
        self.collection.insert_one(listing, None).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Listing>> {
        Ok(self.collection.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn update_fields(&self, id: &ObjectId, fields: &ListingFields) -> Result<bool> {
        let update = doc! {
            "$set": {
                "title": fields.title.as_str(),
                "price": fields.price,
                "image": fields.image.as_str(),
                "location": fields.location.as_str(),
                "description": fields.description.as_str(),
            }
        };
        let result = self.collection.update_one(doc! { "_id": *id }, update, None).await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<Listing>> {
        Ok(self.collection.find_one_and_delete(doc! { "_id": *id }, None).await?)
    }

    async fn push_review(&self, id: &ObjectId, review_id: &ObjectId) -> Result<bool> {
        let update = doc! { "$push": { "reviews": *review_id } };
        let result = self.collection.update_one(doc! { "_id": *id }, update, None).await?;
        Ok(result.matched_count > 0)
    }

    async fn pull_review(&self, id: &ObjectId, review_id: &ObjectId) -> Result<bool> {
        let update = doc! { "$pull": { "reviews": *review_id } };
        let result = self.collection.update_one(doc! { "_id": *id }, update, None).await?;
        Ok(result.modified_count > 0)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = self.collection.delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }
}
