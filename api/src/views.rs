//! Template contexts. Every page gets the session account and the pending
//! flash message next to its own data.

use rocket::http::Status;
use rocket::request::{FlashMessage, Request};
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::models::account::AccountSummary;
use crate::models::listing::{format_price, Listing};
use crate::services::listing_details::ListingDetails;
use crate::services::session::{cached_user, CurrentUser};

#[derive(Serialize)]
struct Page<T: Serialize> {
    current_user: Option<AccountSummary>,
    success: Option<String>,
    error: Option<String>,
    #[serde(flatten)]
    body: T,
}

#[derive(Serialize)]
pub struct NoBody {}

pub fn render<T: Serialize>(
    name: &'static str,
    user: Option<&CurrentUser>,
    flash: Option<FlashMessage<'_>>,
    body: T,
) -> Template {
    let (mut success, mut error) = (None, None);
    if let Some(flash) = flash {
        let message = flash.message().to_string();
        match flash.kind() {
            "success" => success = Some(message),
            _ => error = Some(message),
        }
    }

    Template::render(
        name,
        Page {
            current_user: user.map(CurrentUser::summary),
            success,
            error,
            body,
        },
    )
}

#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

pub fn error_page(req: &Request<'_>, status: Status, message: impl Into<String>) -> Template {
    Template::render(
        "error",
        Page {
            current_user: cached_user(req),
            success: None,
            error: None,
            body: ErrorBody {
                status: status.code,
                message: message.into(),
            },
        },
    )
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image: String,
    pub location: String,
    pub description: String,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        ListingCard {
            id: listing.id.to_hex(),
            title: listing.title.clone(),
            price: format_price(listing.price),
            image: listing.image.clone(),
            location: listing.location.clone(),
            description: listing.description.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct IndexBody {
    pub hotels: Vec<ListingCard>,
}

#[derive(Serialize)]
pub struct EditBody {
    pub hotel: ListingCard,
}

#[derive(Serialize, Debug)]
pub struct ReviewView {
    pub id: String,
    pub rating: i32,
    pub body: String,
    pub author: Option<AccountSummary>,
    pub can_delete: bool,
}

#[derive(Serialize, Debug)]
pub struct ShowBody {
    pub hotel: ListingCard,
    pub author: Option<AccountSummary>,
    pub can_manage: bool,
    pub reviews: Vec<ReviewView>,
}

impl ShowBody {
    pub fn new(details: ListingDetails, viewer: Option<&CurrentUser>) -> Self {
        let viewer_id = viewer.map(|user| *user.id());
        let reviews = details
            .reviews
            .into_iter()
            .map(|(review, author)| ReviewView {
                id: review.id.to_hex(),
                rating: review.rating,
                body: review.body,
                author: author.as_ref().map(|a| a.summary()),
                can_delete: viewer_id == Some(review.author),
            })
            .collect();

        ShowBody {
            hotel: ListingCard::from(&details.listing),
            author: details.author.as_ref().map(|a| a.summary()),
            can_manage: viewer_id == Some(details.listing.author),
            reviews,
        }
    }
}
