use actix_web::{web, Either, HttpResponse};
use serde::Serialize;

use crate::error::ApiError;
use crate::models::ContactSubmission;
use crate::AppState;

use super::with_db;

pub const MISSING_FIELDS: &str = "All fields are required!";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub id: i64,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/contact").route(web::post().to(submit_contact)));
}

/// Accepts either a JSON body or an urlencoded form post
async fn submit_contact(
    state: web::Data<AppState>,
    body: Either<web::Json<ContactSubmission>, web::Form<ContactSubmission>>,
) -> Result<HttpResponse, ApiError> {
    let contact = body
        .into_inner()
        .validate()
        .ok_or_else(|| ApiError::Validation(MISSING_FIELDS.to_string()))?;

    let id = with_db(&state, move |db| db.insert_new_contact(&contact)).await?;
    log::info!("Stored contact message {}", id);

    Ok(HttpResponse::Ok().json(ContactResponse { success: true, id }))
}
