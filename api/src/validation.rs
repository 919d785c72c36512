//! Form inputs and their validation.
//!
//! Every field is collected as a list at parse time so a submission always
//! reaches the handler, missing or repeated fields included. Only the first
//! value of a field counts. `validate` then either produces the typed value
//! the handler works with or the full list of field errors.

use std::fmt;

use rocket::FromForm;

use crate::models::listing::ListingFields;
use crate::models::review::ReviewFields;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &str, message: String) {
        self.0.push(FieldError {
            field: field.to_string(),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

fn first(values: &[String]) -> Option<&str> {
    values.first().map(String::as_str)
}

fn required_text(errors: &mut ValidationErrors, field: &str, values: &[String]) -> String {
    match first(values).map(str::trim) {
        None => {
            errors.push(field, format!("\"{field}\" is required"));
            String::new()
        }
        Some("") => {
            errors.push(field, format!("\"{field}\" is not allowed to be empty"));
            String::new()
        }
        Some(text) => text.to_string(),
    }
}

fn required_number(errors: &mut ValidationErrors, field: &str, values: &[String]) -> Option<f64> {
    let Some(raw) = first(values).map(str::trim).filter(|raw| !raw.is_empty()) else {
        errors.push(field, format!("\"{field}\" is required"));
        return None;
    };
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => {
            errors.push(field, format!("\"{field}\" must be a number"));
            None
        }
    }
}

#[derive(FromForm, Debug, Default, Clone)]
pub struct ListingInput {
    pub title: Vec<String>,
    pub price: Vec<String>,
    pub image: Vec<String>,
    pub location: Vec<String>,
    pub description: Vec<String>,
}

/// `hotel[title]=...&hotel[price]=...` as posted by the listing forms.
#[derive(FromForm, Debug, Default, Clone)]
pub struct ListingSubmission {
    pub hotel: ListingInput,
}

impl ListingSubmission {
    pub fn validate(&self) -> Result<ListingFields, ValidationErrors> {
        let input = &self.hotel;
        let mut errors = ValidationErrors::default();

        let title = required_text(&mut errors, "hotel.title", &input.title);
        let price = required_number(&mut errors, "hotel.price", &input.price);
        if price.is_some_and(|p| p < 0.0) {
            errors.push("hotel.price", "\"hotel.price\" must be greater than or equal to 0".to_string());
        }
        let image = required_text(&mut errors, "hotel.image", &input.image);
        let location = required_text(&mut errors, "hotel.location", &input.location);
        let description = required_text(&mut errors, "hotel.description", &input.description);

        errors.into_result(|| ListingFields {
            title,
            price: price.unwrap_or_default(),
            image,
            location,
            description,
        })
    }
}

#[derive(FromForm, Debug, Default, Clone)]
pub struct ReviewInput {
    pub rating: Vec<String>,
    pub body: Vec<String>,
}

#[derive(FromForm, Debug, Default, Clone)]
pub struct ReviewSubmission {
    pub review: ReviewInput,
}

impl ReviewSubmission {
    pub fn validate(&self) -> Result<ReviewFields, ValidationErrors> {
        let input = &self.review;
        let mut errors = ValidationErrors::default();

        let rating = required_number(&mut errors, "review.rating", &input.rating);
        if let Some(r) = rating {
            if r < 1.0 {
                errors.push("review.rating", "\"review.rating\" must be greater than or equal to 1".to_string());
            } else if r > 5.0 {
                errors.push("review.rating", "\"review.rating\" must be less than or equal to 5".to_string());
            } else if r.fract() != 0.0 {
                errors.push("review.rating", "\"review.rating\" must be an integer".to_string());
            }
        }
        let body = required_text(&mut errors, "review.body", &input.body);

        errors.into_result(|| ReviewFields {
            rating: rating.unwrap_or_default() as i32,
            body,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(FromForm, Debug, Default, Clone)]
pub struct RegistrationInput {
    pub username: Vec<String>,
    pub email: Vec<String>,
    pub password: Vec<String>,
}

fn given(errors: &mut ValidationErrors, field: &str, values: &[String]) -> String {
    match first(values).map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => {
            errors.push(field, format!("No {field} was given"));
            String::new()
        }
    }
}

impl RegistrationInput {
    pub fn validate(&self) -> Result<Registration, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let username = given(&mut errors, "username", &self.username);
        let email = given(&mut errors, "email", &self.email);
        if !email.is_empty() && !email.contains('@') {
            errors.push("email", "Email is invalid".to_string());
        }
        // Passwords are taken verbatim, surrounding whitespace included.
        let password = match first(&self.password) {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => {
                errors.push("password", "No password was given".to_string());
                String::new()
            }
        };

        errors.into_result(|| Registration {
            username,
            email,
            password,
        })
    }
}

#[derive(FromForm, Debug, Default, Clone)]
pub struct LoginInput {
    pub username: Vec<String>,
    pub password: Vec<String>,
}

impl LoginInput {
    /// Username and password, or `None` if either is missing.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = first(&self.username).map(str::trim).filter(|u| !u.is_empty())?;
        let password = first(&self.password).filter(|p| !p.is_empty())?;
        Some((username, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: Option<&str>, price: Option<&str>) -> ListingSubmission {
        ListingSubmission {
            hotel: ListingInput {
                title: title.into_iter().map(str::to_string).collect(),
                price: price.into_iter().map(str::to_string).collect(),
                image: vec!["http://x/y.jpg".to_string()],
                location: vec!["Paris, FR".to_string()],
                description: vec!["nice".to_string()],
            },
        }
    }

    fn review(rating: &str, body: &str) -> ReviewSubmission {
        ReviewSubmission {
            review: ReviewInput {
                rating: vec![rating.to_string()],
                body: vec![body.to_string()],
            },
        }
    }

    #[test]
    fn complete_listing_is_accepted() {
        let fields = listing(Some("Grand Inn"), Some("42")).validate().unwrap();
        assert_eq!(fields.title, "Grand Inn");
        assert_eq!(fields.price, 42.0);
        assert_eq!(fields.location, "Paris, FR");
    }

    #[test]
    fn free_listing_is_accepted() {
        assert_eq!(listing(Some("Hut"), Some("0")).validate().unwrap().price, 0.0);
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errors = ListingSubmission::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(
            fields,
            ["hotel.title", "hotel.price", "hotel.image", "hotel.location", "hotel.description"]
        );
        assert!(errors.to_string().starts_with("\"hotel.title\" is required, \"hotel.price\" is required"));
    }

    #[test]
    fn blank_title_and_negative_price_are_rejected() {
        let errors = listing(Some("   "), Some("-1")).validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "\"hotel.title\" is not allowed to be empty, \"hotel.price\" must be greater than or equal to 0"
        );
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let errors = listing(Some("Inn"), Some("cheap")).validate().unwrap_err();
        assert_eq!(errors.to_string(), "\"hotel.price\" must be a number");
        let errors = listing(Some("Inn"), Some("inf")).validate().unwrap_err();
        assert_eq!(errors.to_string(), "\"hotel.price\" must be a number");
    }

    #[test]
    fn repeated_fields_use_the_first_value() {
        let mut submission = listing(Some("Grand Inn"), Some("42"));
        submission.hotel.title.push("Small Inn".to_string());
        submission.hotel.price.push("oops".to_string());

        let fields = submission.validate().unwrap();
        assert_eq!(fields.title, "Grand Inn");
        assert_eq!(fields.price, 42.0);
    }

    #[test]
    fn ratings_outside_one_to_five_are_rejected() {
        assert!(review("1", "ok").validate().is_ok());
        assert_eq!(review("5", "ok").validate().unwrap().rating, 5);

        let low = review("0", "ok").validate().unwrap_err();
        assert_eq!(low.to_string(), "\"review.rating\" must be greater than or equal to 1");
        let high = review("6", "ok").validate().unwrap_err();
        assert_eq!(high.to_string(), "\"review.rating\" must be less than or equal to 5");
        let fractional = review("2.5", "ok").validate().unwrap_err();
        assert_eq!(fractional.to_string(), "\"review.rating\" must be an integer");
    }

    #[test]
    fn review_needs_a_body() {
        let errors = review("3", "").validate().unwrap_err();
        assert_eq!(errors.to_string(), "\"review.body\" is not allowed to be empty");
    }

    #[test]
    fn registration_reports_missing_fields() {
        let errors = RegistrationInput::default().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "No username was given, No email was given, No password was given"
        );

        let input = RegistrationInput {
            username: vec![" alice ".to_string()],
            email: vec!["a@example.com".to_string()],
            password: vec![" secret".to_string()],
        };
        let registration = input.validate().unwrap();
        assert_eq!(registration.username, "alice");
        assert_eq!(registration.password, " secret");
    }

    #[test]
    fn login_needs_both_credentials() {
        let input = LoginInput {
            username: vec!["alice".to_string()],
            password: vec![],
        };
        assert!(input.credentials().is_none());

        let input = LoginInput {
            username: vec!["alice".to_string()],
            password: vec!["secret".to_string()],
        };
        assert_eq!(input.credentials(), Some(("alice", "secret")));
    }
}
