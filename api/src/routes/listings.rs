use mongodb::bson::oid::ObjectId;
use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{delete, get, post, put, State};
use rocket_dyn_templates::Template;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::listing::Listing;
use crate::repository::Repositories;
use crate::services::listing_details::load_listing_details;
use crate::services::session::CurrentUser;
use crate::validation::ListingSubmission;
use crate::views::{render, EditBody, IndexBody, ListingCard, NoBody, ShowBody};

/// Malformed ids name no listing, so they get the same answer as unknown ones.
pub(crate) fn parse_listing_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::listing_not_found())
}

/// Loads the listing and checks that `user` owns it.
async fn owned_listing(
    repos: &Repositories,
    id: &ObjectId,
    user: &CurrentUser,
    action: &'static str,
) -> Result<Listing, AppError> {
    let listing = repos
        .listings
        .find_by_id(id)
        .await?
        .ok_or_else(AppError::listing_not_found)?;

    if !listing.is_owned_by(user.id()) {
        warn!("{} tried to {action} owned by someone else ({})", user.0.username, listing.id);
        return Err(AppError::Forbidden {
            action,
            redirect: listing.path(),
        });
    }
    Ok(listing)
}

#[get("/hotels")]
pub async fn index(
    user: Option<CurrentUser>,
    flash: Option<FlashMessage<'_>>,
    repos: &State<Repositories>,
) -> Result<Template, AppError> {
    let hotels = repos.listings.find_all().await?;
    let body = IndexBody {
        hotels: hotels.iter().map(ListingCard::from).collect(),
    };
    Ok(render("hotels/index", user.as_ref(), flash, body))
}

#[get("/hotels/new")]
pub fn new_form(user: CurrentUser, flash: Option<FlashMessage<'_>>) -> Template {
    render("hotels/new", Some(&user), flash, NoBody {})
}

#[post("/hotels", data = "<form>")]
pub async fn create(
    user: CurrentUser,
    form: Form<ListingSubmission>,
    repos: &State<Repositories>,
) -> Result<Flash<Redirect>, AppError> {
    let fields = form.validate()?;
    let listing = Listing::new(fields, *user.id());
    repos.listings.insert(&listing).await?;

    info!("{} added hotel {} ({})", user.0.username, listing.title, listing.id);
    Ok(Flash::success(Redirect::to(listing.path()), "New Hotel added successfully"))
}

#[get("/hotels/<id>")]
pub async fn show(
    id: &str,
    user: Option<CurrentUser>,
    flash: Option<FlashMessage<'_>>,
    repos: &State<Repositories>,
) -> Result<Template, AppError> {
    let id = parse_listing_id(id)?;
    let details = load_listing_details(repos, &id)
        .await?
        .ok_or_else(AppError::listing_not_found)?;

    let body = ShowBody::new(details, user.as_ref());
    Ok(render("hotels/show", user.as_ref(), flash, body))
}

#[get("/hotels/<id>/edit")]
pub async fn edit_form(
    id: &str,
    user: CurrentUser,
    flash: Option<FlashMessage<'_>>,
    repos: &State<Repositories>,
) -> Result<Template, AppError> {
    let id = parse_listing_id(id)?;
    let listing = owned_listing(repos, &id, &user, "edit this hotel").await?;

    let body = EditBody {
        hotel: ListingCard::from(&listing),
    };
    Ok(render("hotels/edit", Some(&user), flash, body))
}

#[put("/hotels/<id>", data = "<form>")]
pub async fn update(
    id: &str,
    user: CurrentUser,
    form: Form<ListingSubmission>,
    repos: &State<Repositories>,
) -> Result<Flash<Redirect>, AppError> {
    let id = parse_listing_id(id)?;
    let listing = owned_listing(repos, &id, &user, "edit this hotel").await?;
    let fields = form.validate()?;

    if !repos.listings.update_fields(&listing.id, &fields).await? {
        return Err(AppError::listing_not_found());
    }

    info!("{} updated hotel {}", user.0.username, listing.id);
    Ok(Flash::success(Redirect::to(listing.path()), "Hotel updated successfully"))
}

/// Deletes the listing together with every review posted on it.
#[delete("/hotels/<id>")]
pub async fn delete(
    id: &str,
    user: CurrentUser,
    repos: &State<Repositories>,
) -> Result<Flash<Redirect>, AppError> {
    let id = parse_listing_id(id)?;
    owned_listing(repos, &id, &user, "delete this hotel").await?;

    let removed = repos
        .listings
        .delete(&id)
        .await?
        .ok_or_else(AppError::listing_not_found)?;
    let purged = repos.reviews.delete_many(&removed.reviews).await?;

    info!("{} deleted hotel {} and {purged} review(s)", user.0.username, removed.id);
    Ok(Flash::success(Redirect::to("/hotels"), "Hotel deleted successfully"))
}
