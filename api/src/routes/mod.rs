pub mod accounts;
pub mod catchers;
pub mod listings;
pub mod reviews;

use rocket::{routes, Catcher, Route};

pub fn all() -> Vec<Route> {
    routes![
        accounts::home,
        accounts::register_form,
        accounts::register,
        accounts::login_form,
        accounts::login,
        accounts::logout,
        listings::index,
        listings::new_form,
        listings::create,
        listings::show,
        listings::edit_form,
        listings::update,
        listings::delete,
        reviews::create,
        reviews::delete,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    rocket::catchers![catchers::unauthorized, catchers::not_found, catchers::fallback]
}
