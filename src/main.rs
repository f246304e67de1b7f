use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use blog_api::config::{Config, StoreBackend};
use blog_api::database;
use blog_api::post::post_memory::InMemoryPostStore;
use blog_api::post::post_service::MongoPostStore;
use blog_api::post::post_store::PostStore;
use blog_api::router::index::routes;
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    let post_store: Arc<dyn PostStore> = match config.store_backend {
        StoreBackend::Mongo => {
            let mongo_client = database::connect_to_mongo(&config.database_url)
                .await
                .map_err(std::io::Error::other)?;
            Arc::new(MongoPostStore::new(&mongo_client, &config.database_name))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory post store, data will not survive a restart");
            Arc::new(InMemoryPostStore::new())
        }
    };
    let post_store: web::Data<dyn PostStore> = web::Data::from(post_store);

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(post_store.clone())
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
