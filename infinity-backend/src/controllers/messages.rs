use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

use super::with_db;

#[derive(Debug, Serialize)]
pub struct DeleteMessageResponse {
    pub success: bool,
    /// False when no message had that id
    pub deleted: bool,
}

// Admin routes carry no authentication
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/messages")
            .route("", web::get().to(list_messages))
            .route("/{id}", web::delete().to(delete_message)),
    );
    cfg.service(web::resource("/messages").route(web::get().to(list_messages)));
}

async fn list_messages(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let messages = with_db(&state, |db| db.list_contacts()).await?;
    Ok(HttpResponse::Ok().json(messages))
}

async fn delete_message(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw = path.into_inner();
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid message id: {}", raw)))?;

    let deleted = with_db(&state, move |db| db.delete_contact(id)).await?;
    if deleted {
        log::info!("Deleted contact message {}", id);
    } else {
        log::debug!("Delete requested for missing contact message {}", id);
    }

    Ok(HttpResponse::Ok().json(DeleteMessageResponse {
        success: true,
        deleted,
    }))
}
