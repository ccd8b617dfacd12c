use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::AppState;

use super::with_db;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/services").route(web::get().to(list_services)));
}

async fn list_services(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let services = with_db(&state, |db| db.list_services()).await?;
    Ok(HttpResponse::Ok().json(services))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::{app_state, drop_table};
    use crate::models::{ServiceOffering, DEFAULT_SERVICES};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn test_list_seeded_services() {
        let state = app_state();
        state.db.seed_services_if_empty(DEFAULT_SERVICES).unwrap();

        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/services").to_request();
        let services: Vec<ServiceOffering> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(services.len(), 4);
        assert_eq!(services[0].title, DEFAULT_SERVICES[0].title);
        assert_eq!(services[3].description, DEFAULT_SERVICES[3].description);
    }

    #[actix_web::test]
    async fn test_storage_failure_is_internal_error() {
        let state = app_state();
        drop_table(&state, "services");
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/services").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Internal server error"}));
    }
}
