use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod error;
mod models;

use config::Config;
use db::Database;
use models::DEFAULT_SERVICES;

/// Shared handler state. The database handle is created once in `main`
/// and lives until the server stops.
pub struct AppState {
    pub db: Arc<Database>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let port = config.port;

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).map_err(|e| {
        log::error!("Failed to initialize database: {}", e);
        io::Error::other(e)
    })?;

    let seeded = db.seed_services_if_empty(DEFAULT_SERVICES).map_err(|e| {
        log::error!("Failed to seed services: {}", e);
        io::Error::other(e)
    })?;
    if seeded > 0 {
        log::info!("Seeded {} default services", seeded);
    } else {
        log::info!("Services already present, skipping seed");
    }
    match db.count_services() {
        Ok(count) => log::info!("{} services available", count),
        Err(e) => log::warn!("Failed to count services: {}", e),
    }

    let db = Arc::new(db);

    let public_dir = controllers::frontend::resolve_public_dir(config.public_dir.as_deref());
    if let Some(dir) = &public_dir {
        log::info!("Serving frontend from: {}", dir.display());
    }

    log::info!("Starting Infinity server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::config)
            // Static files last: mounted at "/" they match every path
            .configure(|cfg| controllers::frontend::config(cfg, public_dir.as_deref()))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
