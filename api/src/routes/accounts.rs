use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, State};
use rocket_dyn_templates::Template;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::account::Account;
use crate::repository::{RepositoryError, Repositories};
use crate::services::password::{hash_password, verify_password};
use crate::services::session::{end_session, start_session, CurrentUser};
use crate::validation::{LoginInput, RegistrationInput};
use crate::views::{render, NoBody};

const USERNAME_TAKEN: &str = "A user with the given username is already registered";

#[get("/")]
pub fn home(user: Option<CurrentUser>, flash: Option<FlashMessage<'_>>) -> Template {
    render("home", user.as_ref(), flash, NoBody {})
}

#[get("/register")]
pub fn register_form(user: Option<CurrentUser>, flash: Option<FlashMessage<'_>>) -> Template {
    render("users/register", user.as_ref(), flash, NoBody {})
}

#[post("/register", data = "<form>")]
pub async fn register(
    form: Form<RegistrationInput>,
    repos: &State<Repositories>,
    config: &State<AppConfig>,
    cookies: &CookieJar<'_>,
) -> Result<Flash<Redirect>, AppError> {
    let registration = form
        .validate()
        .map_err(|errors| AppError::Registration(errors.to_string()))?;

    if repos.accounts.find_by_username(&registration.username).await?.is_some() {
        return Err(AppError::Registration(USERNAME_TAKEN.to_string()));
    }

    let credential = hash_password(&registration.password, config.password_iterations)?;
    let account = Account::new(registration.username, registration.email, credential);
    match repos.accounts.insert(&account).await {
        Ok(()) => {}
        // Lost a race with another registration of the same name.
        Err(RepositoryError::Duplicate(_)) => {
            return Err(AppError::Registration(USERNAME_TAKEN.to_string()))
        }
        Err(e) => return Err(e.into()),
    }

    start_session(cookies, &account, config)?;
    info!("Registered account {}", account.username);
    Ok(Flash::success(Redirect::to("/hotels"), "You are registered"))
}

#[get("/login")]
pub fn login_form(user: Option<CurrentUser>, flash: Option<FlashMessage<'_>>) -> Template {
    render("users/login", user.as_ref(), flash, NoBody {})
}

#[post("/login", data = "<form>")]
pub async fn login(
    form: Form<LoginInput>,
    repos: &State<Repositories>,
    config: &State<AppConfig>,
    cookies: &CookieJar<'_>,
) -> Result<Flash<Redirect>, AppError> {
    let (username, password) = form.credentials().ok_or(AppError::InvalidCredentials)?;
    let account = repos
        .accounts
        .find_by_username(username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(password, &account.credential)? {
        info!("Failed login for {username}");
        return Err(AppError::InvalidCredentials);
    }

    start_session(cookies, &account, config)?;
    Ok(Flash::success(Redirect::to("/hotels"), "You are logged in"))
}

#[get("/logout")]
pub fn logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    end_session(cookies);
    Flash::success(Redirect::to("/hotels"), "You are logged out")
}
