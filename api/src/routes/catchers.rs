use rocket::catch;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{Flash, Redirect};
use rocket_dyn_templates::Template;

use crate::error::GENERIC_MESSAGE;
use crate::services::session::CurrentUser;
use crate::views::error_page;

/// Guarded routes fail with 401 when there is no session; send the visitor
/// to the login form instead.
#[catch(401)]
pub fn unauthorized() -> Flash<Redirect> {
    Flash::error(Redirect::to("/login"), "You must be signed in first")
}

/// No route guard ran for unmatched requests, so the session is loaded here
/// to fill the cache `error_page` reads from.
async fn load_session(req: &Request<'_>) {
    let _ = req.guard::<Option<CurrentUser>>().await;
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> (Status, Template) {
    load_session(req).await;
    (Status::NotFound, error_page(req, Status::NotFound, "Page not Found"))
}

#[catch(default)]
pub async fn fallback(status: Status, req: &Request<'_>) -> (Status, Template) {
    load_session(req).await;
    (status, error_page(req, status, GENERIC_MESSAGE))
}
