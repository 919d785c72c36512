//! Server-rendered hotel listings: accounts, listings owned by accounts,
//! and reviews on listings, stored in MongoDB and rendered with Tera.

pub mod config;
pub mod error;
pub mod jwt;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod validation;
pub mod views;

use rocket::figment::Figment;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

use config::AppConfig;
use repository::Repositories;

/// Assembles the application on top of `figment`, which supplies Rocket's
/// own settings (address, port, `template_dir`).
pub fn build(figment: Figment, config: AppConfig, repos: Repositories) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(config)
        .manage(repos)
        .attach(Template::fairing())
        .mount("/", routes::all())
        .register("/", routes::catchers())
}
