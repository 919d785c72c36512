//! In-process store used by the `memory` store kind and by tests.

use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{AccountRepository, ListingRepository, RepositoryError, Result, ReviewRepository};
use crate::models::account::Account;
use crate::models::listing::{Listing, ListingFields};
use crate::models::review::Review;

#[derive(Default)]
pub struct MemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

#[rocket::async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn insert(&self, account: &Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(RepositoryError::Duplicate("username"));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }

    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().filter(|a| ids.contains(&a.id)).cloned().collect())
    }

    async fn find_first(&self) -> Result<Option<Account>> {
        Ok(self.accounts.read().await.first().cloned())
    }
}

#[derive(Default)]
pub struct MemoryListingRepository {
    listings: RwLock<Vec<Listing>>,
}

#[rocket::async_trait]
impl ListingRepository for MemoryListingRepository {
    async fn find_all(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.read().await.clone())
    }

    async fn insert(&self, listing: &Listing) -> Result<()> {
        self.listings.write().await.push(listing.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.iter().find(|l| l.id == *id).cloned())
    }

    async fn update_fields(&self, id: &ObjectId, fields: &ListingFields) -> Result<bool> {
        let mut listings = self.listings.write().await;
        match listings.iter_mut().find(|l| l.id == *id) {
            Some(listing) => {
                listing.apply(fields.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<Listing>> {
        let mut listings = self.listings.write().await;
        Ok(listings
            .iter()
            .position(|l| l.id == *id)
            .map(|index| listings.remove(index)))
    }

    async fn push_review(&self, id: &ObjectId, review_id: &ObjectId) -> Result<bool> {
        let mut listings = self.listings.write().await;
        match listings.iter_mut().find(|l| l.id == *id) {
            Some(listing) => {
                listing.reviews.push(*review_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pull_review(&self, id: &ObjectId, review_id: &ObjectId) -> Result<bool> {
        let mut listings = self.listings.write().await;
        let Some(listing) = listings.iter_mut().find(|l| l.id == *id) else {
            return Ok(false);
        };
        let before = listing.reviews.len();
        listing.reviews.retain(|r| r != review_id);
        Ok(listing.reviews.len() != before)
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut listings = self.listings.write().await;
        let count = listings.len() as u64;
        listings.clear();
        Ok(count)
    }
}

#[derive(Default)]
pub struct MemoryReviewRepository {
    reviews: RwLock<Vec<Review>>,
}

#[rocket::async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn insert(&self, review: &Review) -> Result<()> {
        self.reviews.write().await.push(review.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.iter().find(|r| r.id == *id).cloned())
    }

    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.iter().filter(|r| ids.contains(&r.id)).cloned().collect())
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool> {
        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|r| r.id != *id);
        Ok(reviews.len() != before)
    }

    async fn delete_many(&self, ids: &[ObjectId]) -> Result<u64> {
        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|r| !ids.contains(&r.id));
        Ok((before - reviews.len()) as u64)
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut reviews = self.reviews.write().await;
        let count = reviews.len() as u64;
        reviews.clear();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::ReviewFields;
    use crate::services::password::Credential;

    fn account(username: &str) -> Account {
        let credential = Credential {
            salt: String::new(),
            hash: String::new(),
            iterations: 1,
        };
        Account::new(username.to_string(), format!("{username}@example.com"), credential)
    }

    fn fields(title: &str) -> ListingFields {
        ListingFields {
            title: title.to_string(),
            price: 10.0,
            image: "http://x/y.jpg".to_string(),
            location: "Oslo, NO".to_string(),
            description: "quiet".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_usernames_are_rejected() {
        let repo = MemoryAccountRepository::default();
        repo.insert(&account("alice")).await.unwrap();

        let err = repo.insert(&account("alice")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate("username")));
        assert!(repo.find_by_username("alice").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn listing_reviews_keep_insertion_order_and_pull_removes_one() {
        let repo = MemoryListingRepository::default();
        let listing = Listing::new(fields("Grand Inn"), ObjectId::new());
        repo.insert(&listing).await.unwrap();

        let (first, second) = (ObjectId::new(), ObjectId::new());
        assert!(repo.push_review(&listing.id, &first).await.unwrap());
        assert!(repo.push_review(&listing.id, &second).await.unwrap());
        assert!(repo.pull_review(&listing.id, &first).await.unwrap());
        assert!(!repo.pull_review(&listing.id, &first).await.unwrap());

        let stored = repo.find_by_id(&listing.id).await.unwrap().unwrap();
        assert_eq!(stored.reviews, vec![second]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_listings() {
        let repo = MemoryListingRepository::default();
        let missing = ObjectId::new();
        assert!(!repo.update_fields(&missing, &fields("x")).await.unwrap());
        assert!(repo.delete(&missing).await.unwrap().is_none());

        let listing = Listing::new(fields("Grand Inn"), ObjectId::new());
        repo.insert(&listing).await.unwrap();
        assert!(repo.update_fields(&listing.id, &fields("Small Inn")).await.unwrap());
        let removed = repo.delete(&listing.id).await.unwrap().unwrap();
        assert_eq!(removed.title, "Small Inn");
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_many_only_touches_the_given_reviews() {
        let repo = MemoryReviewRepository::default();
        let author = ObjectId::new();
        let reviews: Vec<Review> = (1..=3)
            .map(|rating| {
                Review::new(
                    ReviewFields {
                        rating,
                        body: "ok".to_string(),
                    },
                    author,
                )
            })
            .collect();
        for review in &reviews {
            repo.insert(review).await.unwrap();
        }

        let deleted = repo.delete_many(&[reviews[0].id, reviews[2].id]).await.unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(repo.find_many(&[reviews[1].id]).await.unwrap().len(), 1);
        assert!(repo.find_by_id(&reviews[0].id).await.unwrap().is_none());
    }
}
