use crate::utils::error::CustomError;
use log::{error, info};
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

pub struct Database {
    pub client: Client,
}

impl Database {
    pub async fn init(mongodb_uri: &str) -> Result<Self, CustomError> {
        let mut client_options = ClientOptions::parse(mongodb_uri).await.map_err(|e| {
            CustomError::ServiceUnavailableError(format!("Invalid MongoDB URI: {}", e))
        })?;
        client_options.app_name = Some("blog_api".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| CustomError::ServiceUnavailableError(e.to_string()))?;

        // Ping the server to see if you can connect to the cluster
        client
            .database("admin")
            .run_command(doc! {"ping": 1})
            .await
            .map_err(|e| {
                CustomError::ServiceUnavailableError(format!("MongoDB ping failed: {}", e))
            })?;

        info!("Connected successfully to MongoDB");

        Ok(Self { client })
    }
}

pub async fn connect_to_mongo(mongodb_uri: &str) -> Result<Client, CustomError> {
    let database = Database::init(mongodb_uri).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    Ok(database.client)
}
