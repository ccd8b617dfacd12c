use actix_web::{web, HttpRequest};
use std::sync::Arc;

use crate::db::Database;
use crate::error::ApiError;
use crate::AppState;

pub mod contact;
pub mod frontend;
pub mod health;
pub mod messages;
pub mod services;

/// Run a storage call on the blocking thread pool so SQLite I/O never
/// stalls an actix worker.
pub(crate) async fn with_db<F, T>(state: &web::Data<AppState>, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> rusqlite::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let db = Arc::clone(&state.db);
    let result = web::block(move || f(db.as_ref())).await?;
    Ok(result?)
}

/// Registers every API route. Static files are configured separately.
pub fn config(cfg: &mut web::ServiceConfig) {
    body_config(cfg);
    health::config(cfg);
    contact::config(cfg);
    messages::config(cfg);
    services::config(cfg);
}

/// JSON and form extractor settings: malformed bodies become JSON 400s
pub fn body_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        ApiError::BadRequest(format!("Invalid JSON body: {}", err)).into()
    }))
    .app_data(web::FormConfig::default().error_handler(|err, _req: &HttpRequest| {
        ApiError::BadRequest(format!("Invalid form body: {}", err)).into()
    }));
}
