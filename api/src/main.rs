use hotels_api::config::AppConfig;
use hotels_api::repository::Repositories;
use tracing_subscriber::{fmt, EnvFilter};

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let figment = rocket::Config::figment();
    let config = AppConfig::from_figment(&figment)?;
    let repos = Repositories::connect(&config).await?;

    let _rocket = hotels_api::build(figment, config, repos).launch().await?;
    Ok(())
}
