use mongodb::{error::Result, options::ClientOptions, Client};

pub async fn setup_mongo(mongo_uri: &str, app_name: &str) -> Result<Client> {
    let mut client_options = ClientOptions::parse(mongo_uri).await?;
    client_options.app_name = Some(app_name.to_string());
    Client::with_options(client_options)
}
