use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;

use crate::models::account::Account;
use crate::models::listing::Listing;
use crate::models::review::Review;
use crate::repository::{Repositories, Result};

/// A listing with its author and reviews resolved, reviews in the order
/// they were posted.
#[derive(Debug, Clone)]
pub struct ListingDetails {
    pub listing: Listing,
    pub author: Option<Account>,
    pub reviews: Vec<(Review, Option<Account>)>,
}

pub async fn load_listing_details(repos: &Repositories, id: &ObjectId) -> Result<Option<ListingDetails>> {
    let Some(listing) = repos.listings.find_by_id(id).await? else {
        return Ok(None);
    };

    let mut reviews_by_id: HashMap<ObjectId, Review> = repos
        .reviews
        .find_many(&listing.reviews)
        .await?
        .into_iter()
        .map(|review| (review.id, review))
        .collect();
    // Dangling ids are skipped rather than failing the page.
    let reviews: Vec<Review> = listing
        .reviews
        .iter()
        .filter_map(|id| reviews_by_id.remove(id))
        .collect();

    let mut account_ids: Vec<ObjectId> = reviews.iter().map(|r| r.author).collect();
    account_ids.push(listing.author);
    account_ids.sort();
    account_ids.dedup();
    let accounts: HashMap<ObjectId, Account> = repos
        .accounts
        .find_many(&account_ids)
        .await?
        .into_iter()
        .map(|account| (account.id, account))
        .collect();

    let author = accounts.get(&listing.author).cloned();
    let reviews = reviews
        .into_iter()
        .map(|review| {
            let author = accounts.get(&review.author).cloned();
            (review, author)
        })
        .collect();

    Ok(Some(ListingDetails {
        listing,
        author,
        reviews,
    }))
}
