use rocket::figment::Figment;
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_SESSION_SECRET: &str = "secret";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Mongo,
    Memory,
}

/// Application settings, read from the same figment Rocket uses
/// (`Rocket.toml` and `ROCKET_*` environment variables).
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub database: String,
    pub store: StoreKind,
    pub session_secret: String,
    pub session_ttl_secs: i64,
    pub password_iterations: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            mongo_uri: "mongodb://localhost:27017".to_string(),
            database: "hotels".to_string(),
            store: StoreKind::Mongo,
            session_secret: DEFAULT_SESSION_SECRET.to_string(),
            session_ttl_secs: 60 * 60,
            password_iterations: 25_000,
        }
    }
}

impl AppConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, rocket::figment::Error> {
        let config: AppConfig = figment.extract()?;
        if config.session_secret == DEFAULT_SESSION_SECRET {
            warn!("session_secret not set, signing sessions with the default secret");
        }
        Ok(config)
    }

    pub fn session_key(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }
}
