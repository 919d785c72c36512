mod seed_helpers;
mod seeder;

use clap::Parser;
use hotels_api::config::mongo_config::setup_mongo;
use hotels_api::repository::Repositories;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Wipes the hotels database and fills it with sample listings.
#[derive(Parser, Debug)]
#[command(name = "hotels-seed", version)]
struct Args {
    #[arg(long, default_value = "mongodb://localhost:27017")]
    mongo_uri: String,

    #[arg(long, default_value = "hotels")]
    database: String,

    /// Number of listings to insert.
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Username that will own the listings. Defaults to the first account.
    #[arg(long)]
    author: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let client = setup_mongo(&args.mongo_uri, "hotels-seed").await?;
    let repos = Repositories::mongo(&client, &args.database).await?;
    info!("Database connected");

    let author = seeder::resolve_author(&repos, args.author.as_deref()).await?;
    let mut rng = rand::thread_rng();
    let listings: Vec<_> = (0..args.count)
        .map(|_| seeder::sample_listing(&mut rng, author.id))
        .collect();

    let report = seeder::reseed(&repos, &listings).await?;
    info!(
        "Removed {} listings and {} reviews, inserted {} listings owned by {}",
        report.removed_listings, report.removed_reviews, report.inserted, author.username
    );
    Ok(())
}
