use mongodb::bson::oid::ObjectId;
use rocket::form::Form;
use rocket::response::{Flash, Redirect};
use rocket::{delete, post, State};
use tracing::{info, warn};

use super::listings::parse_listing_id;
use crate::error::AppError;
use crate::models::review::Review;
use crate::repository::Repositories;
use crate::services::session::CurrentUser;
use crate::validation::ReviewSubmission;

#[post("/hotels/<id>/reviews", data = "<form>")]
pub async fn create(
    id: &str,
    user: CurrentUser,
    form: Form<ReviewSubmission>,
    repos: &State<Repositories>,
) -> Result<Flash<Redirect>, AppError> {
    let id = parse_listing_id(id)?;
    let listing = repos
        .listings
        .find_by_id(&id)
        .await?
        .ok_or_else(AppError::listing_not_found)?;
    let fields = form.validate()?;

    let review = Review::new(fields, *user.id());
    repos.reviews.insert(&review).await?;
    if !repos.listings.push_review(&listing.id, &review.id).await? {
        // The listing went away between the two writes.
        repos.reviews.delete(&review.id).await?;
        return Err(AppError::listing_not_found());
    }

    info!("{} reviewed hotel {} ({} stars)", user.0.username, listing.id, review.rating);
    Ok(Flash::success(Redirect::to(listing.path()), "Review added successfully"))
}

#[delete("/hotels/<id>/reviews/<review_id>")]
pub async fn delete(
    id: &str,
    review_id: &str,
    user: CurrentUser,
    repos: &State<Repositories>,
) -> Result<Flash<Redirect>, AppError> {
    let id = parse_listing_id(id)?;
    let listing = repos
        .listings
        .find_by_id(&id)
        .await?
        .ok_or_else(AppError::listing_not_found)?;

    let review_id = ObjectId::parse_str(review_id)
        .ok()
        .filter(|rid| listing.reviews.contains(rid))
        .ok_or_else(|| AppError::review_not_found(listing.path()))?;
    let review = repos
        .reviews
        .find_by_id(&review_id)
        .await?
        .ok_or_else(|| AppError::review_not_found(listing.path()))?;

    if review.author != *user.id() {
        warn!("{} tried to delete review {} by someone else", user.0.username, review.id);
        return Err(AppError::Forbidden {
            action: "delete this review",
            redirect: listing.path(),
        });
    }

    repos.listings.pull_review(&listing.id, &review.id).await?;
    repos.reviews.delete(&review.id).await?;

    info!("{} deleted review {} on hotel {}", user.0.username, review.id, listing.id);
    Ok(Flash::success(Redirect::to(listing.path()), "Review deleted successfully"))
}
