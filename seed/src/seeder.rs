use hotels_api::models::account::Account;
use hotels_api::models::listing::{Listing, ListingFields};
use hotels_api::repository::{Repositories, RepositoryError};
use mongodb::bson::oid::ObjectId;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::seed_helpers::{CITIES, DESCRIPTION, DESCRIPTORS, IMAGE_URL, PLACES};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no account named {0}")]
    UnknownAuthor(String),

    #[error("there are no accounts yet, register one first or pass --author")]
    NoAccounts,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SeedReport {
    pub removed_listings: u64,
    pub removed_reviews: u64,
    pub inserted: usize,
}

/// The named account, or the first one in the store.
pub async fn resolve_author(repos: &Repositories, username: Option<&str>) -> Result<Account, SeedError> {
    match username {
        Some(name) => repos
            .accounts
            .find_by_username(name)
            .await?
            .ok_or_else(|| SeedError::UnknownAuthor(name.to_string())),
        None => repos.accounts.find_first().await?.ok_or(SeedError::NoAccounts),
    }
}

fn sample<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

pub fn sample_listing<R: Rng + ?Sized>(rng: &mut R, author: ObjectId) -> Listing {
    let (city, state) = CITIES.choose(rng).copied().unwrap_or(("Springfield", "Illinois"));
    let fields = ListingFields {
        title: format!("{} {}", sample(rng, DESCRIPTORS), sample(rng, PLACES)),
        price: f64::from(rng.gen_range(0..100u32)),
        image: IMAGE_URL.to_string(),
        location: format!("{city}, {state}"),
        description: DESCRIPTION.to_string(),
    };
    Listing::new(fields, author)
}

/// Wipes every listing and review, then inserts `listings`.
pub async fn reseed(repos: &Repositories, listings: &[Listing]) -> Result<SeedReport, SeedError> {
    let removed_listings = repos.listings.delete_all().await?;
    // Reviews only hang off listings, so none survive a wipe.
    let removed_reviews = repos.reviews.delete_all().await?;

    for listing in listings {
        repos.listings.insert(listing).await?;
    }

    Ok(SeedReport {
        removed_listings,
        removed_reviews,
        inserted: listings.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotels_api::models::review::{Review, ReviewFields};
    use hotels_api::services::password::hash_password;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn account(username: &str) -> Account {
        let credential = hash_password("secret", 1).unwrap();
        Account::new(username.to_string(), format!("{username}@example.com"), credential)
    }

    #[test]
    fn sample_listings_are_assembled_from_the_word_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        let author = ObjectId::new();
        for _ in 0..50 {
            let listing = sample_listing(&mut rng, author);
            let (descriptor, place) = listing.title.split_once(' ').unwrap();
            assert!(DESCRIPTORS.contains(&descriptor));
            assert!(PLACES.contains(&place));
            assert!(CITIES.iter().any(|(c, s)| listing.location == format!("{c}, {s}")));
            assert!((0.0..100.0).contains(&listing.price));
            assert_eq!(listing.price.fract(), 0.0);
            assert_eq!(listing.author, author);
            assert!(listing.reviews.is_empty());
        }
    }

    #[tokio::test]
    async fn reseed_replaces_listings_and_drops_reviews() {
        let repos = Repositories::in_memory();
        let mut rng = StdRng::seed_from_u64(1);
        let author = ObjectId::new();

        let old = sample_listing(&mut rng, author);
        repos.listings.insert(&old).await.unwrap();
        let review = Review::new(
            ReviewFields {
                rating: 4,
                body: "ok".to_string(),
            },
            author,
        );
        repos.reviews.insert(&review).await.unwrap();

        let fresh: Vec<Listing> = (0..10).map(|_| sample_listing(&mut rng, author)).collect();
        let report = reseed(&repos, &fresh).await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                removed_listings: 1,
                removed_reviews: 1,
                inserted: 10,
            }
        );
        let stored = repos.listings.find_all().await.unwrap();
        assert_eq!(stored.len(), 10);
        assert!(stored.iter().all(|l| l.id != old.id));
        assert!(repos.reviews.find_by_id(&review.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn author_is_the_named_account_or_the_first_one() {
        let repos = Repositories::in_memory();
        assert!(matches!(resolve_author(&repos, None).await, Err(SeedError::NoAccounts)));

        repos.accounts.insert(&account("alice")).await.unwrap();
        repos.accounts.insert(&account("bob")).await.unwrap();

        assert_eq!(resolve_author(&repos, None).await.unwrap().username, "alice");
        assert_eq!(resolve_author(&repos, Some("bob")).await.unwrap().username, "bob");
        assert!(matches!(
            resolve_author(&repos, Some("carol")).await,
            Err(SeedError::UnknownAuthor(name)) if name == "carol"
        ));
    }
}
