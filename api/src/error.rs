use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Flash, Redirect, Responder};
use thiserror::Error;
use tracing::error;

use crate::repository::RepositoryError;
use crate::services::password::PasswordError;
use crate::validation::ValidationErrors;
use crate::views;

pub const GENERIC_MESSAGE: &str = "Something went wrong";

/// Everything a handler can fail with. The `Responder` impl below is the one
/// place where failures become HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{message}")]
    NotFound {
        message: &'static str,
        redirect: String,
    },

    #[error("You are not authorized to {action}")]
    Forbidden {
        action: &'static str,
        redirect: String,
    },

    #[error("{0}")]
    Registration(String),

    #[error("Password or username is incorrect")]
    InvalidCredentials,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("could not sign session: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn listing_not_found() -> Self {
        AppError::NotFound {
            message: "Hotel not found",
            redirect: "/hotels".to_string(),
        }
    }

    pub fn review_not_found(listing_path: String) -> Self {
        AppError::NotFound {
            message: "Review not found",
            redirect: listing_path,
        }
    }

    /// Where the user is sent back to, for failures answered with a redirect
    /// and a flash message rather than an error page.
    fn redirect(&self) -> Option<&str> {
        match self {
            AppError::NotFound { redirect, .. } | AppError::Forbidden { redirect, .. } => Some(redirect),
            AppError::Registration(_) => Some("/register"),
            AppError::InvalidCredentials => Some("/login"),
            _ => None,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            AppError::Validation(_) => Status::BadRequest,
            AppError::NotFound { .. }
            | AppError::Forbidden { .. }
            | AppError::Registration(_)
            | AppError::InvalidCredentials => Status::SeeOther,
            AppError::Repository(_) | AppError::Password(_) | AppError::Session(_) => {
                Status::InternalServerError
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        if let Some(to) = self.redirect() {
            let to = to.to_string();
            return Flash::error(Redirect::to(to), self.to_string()).respond_to(req);
        }

        let status = self.status();
        let message = match self {
            AppError::Validation(errors) => errors.to_string(),
            other => {
                error!("{} {} failed: {other}", req.method(), req.uri());
                GENERIC_MESSAGE.to_string()
            }
        };
        (status, views::error_page(req, status, message)).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ListingSubmission;

    #[test]
    fn validation_failures_are_bad_requests() {
        let errors = ListingSubmission::default().validate().unwrap_err();
        let err = AppError::from(errors);
        assert_eq!(err.status(), Status::BadRequest);
        assert!(err.redirect().is_none());
    }

    #[test]
    fn ownership_failures_redirect_back_to_the_listing() {
        let err = AppError::Forbidden {
            action: "edit this hotel",
            redirect: "/hotels/abc".to_string(),
        };
        assert_eq!(err.redirect(), Some("/hotels/abc"));
        assert_eq!(err.to_string(), "You are not authorized to edit this hotel");
    }

    #[test]
    fn store_failures_are_internal_errors() {
        let err = AppError::Repository(RepositoryError::Duplicate("username"));
        assert_eq!(err.status(), Status::InternalServerError);
        assert!(err.redirect().is_none());
    }
}
