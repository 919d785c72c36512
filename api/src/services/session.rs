use mongodb::bson::oid::ObjectId;
use rocket::http::{Cookie, CookieJar, SameSite, Status};
use rocket::request::{self, FromRequest, Request};
use rocket::time::Duration;
use rocket::outcome::Outcome;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::jwt::jwt_helper::{create_token, verify_token};
use crate::models::account::{Account, AccountSummary};
use crate::repository::Repositories;

pub const SESSION_COOKIE: &str = "session";

/// The authenticated account of the current request.
///
/// As a guard it fails with `401 Unauthorized` when the request carries no
/// valid session; wrap it in `Option` for pages that render for everyone.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Account);

impl CurrentUser {
    pub fn id(&self) -> &ObjectId {
        &self.0.id
    }

    pub fn summary(&self) -> AccountSummary {
        self.0.summary()
    }
}

/// Per-request cache of the session lookup, so the cookie is verified and
/// the account loaded at most once however many guards ask.
pub(crate) struct SessionLookup(pub Option<Account>);

async fn resolve_session(req: &Request<'_>) -> Option<Account> {
    let token = req.cookies().get(SESSION_COOKIE)?.value().to_string();
    let config = req.rocket().state::<AppConfig>()?;
    let repos = req.rocket().state::<Repositories>()?;

    let claims = verify_token(&token, config.session_key())
        .map_err(|e| debug!("Rejecting session token: {e}"))
        .ok()?;
    let account_id = ObjectId::parse_str(&claims.sub)
        .map_err(|e| debug!("Session subject is not an account id: {e}"))
        .ok()?;

    match repos.accounts.find_by_id(&account_id).await {
        Ok(account) => account,
        Err(e) => {
            warn!("Could not load session account {account_id}: {e}");
            None
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CurrentUser {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, ()> {
        let lookup = req
            .local_cache_async(async { SessionLookup(resolve_session(req).await) })
            .await;

        match &lookup.0 {
            Some(account) => Outcome::Success(CurrentUser(account.clone())),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// The session account if a guard already resolved it during this request.
pub(crate) fn cached_user(req: &Request<'_>) -> Option<AccountSummary> {
    req.local_cache(|| SessionLookup(None))
        .0
        .as_ref()
        .map(Account::summary)
}

pub fn start_session(
    cookies: &CookieJar<'_>,
    account: &Account,
    config: &AppConfig,
) -> jsonwebtoken::errors::Result<()> {
    let token = create_token(&account.id, config.session_key(), config.session_ttl_secs)?;
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(config.session_ttl_secs));
    cookies.add(cookie);
    Ok(())
}

pub fn end_session(cookies: &CookieJar<'_>) {
    cookies.remove(Cookie::build(SESSION_COOKIE).path("/"));
}
