//! Static frontend: files from the public directory, with a plaintext
//! banner at `/` when there is no index page to serve.

use actix_files::Files;
use actix_web::{web, HttpResponse, Responder};
use std::path::{Path, PathBuf};

pub const BANNER: &str = "Infinity backend is running";

/// Resolve the configured public directory, logging why serving is off
pub fn resolve_public_dir(configured: Option<&str>) -> Option<PathBuf> {
    let Some(dir) = configured else {
        log::info!("Frontend serving disabled via DISABLE_FRONTEND env var");
        return None;
    };

    let path = Path::new(dir);
    if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        log::warn!("Public directory {} not found - static file serving disabled", dir);
        None
    }
}

/// Must be registered after every API route: `Files` mounted at `/`
/// would otherwise shadow them.
pub fn config(cfg: &mut web::ServiceConfig, public_dir: Option<&Path>) {
    let has_index = public_dir
        .map(|dir| dir.join("index.html").is_file())
        .unwrap_or(false);

    if !has_index {
        cfg.service(web::resource("/").route(web::get().to(banner)));
    }

    if let Some(dir) = public_dir {
        cfg.service(Files::new("/", dir).index_file("index.html"));
    }
}

async fn banner() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(BANNER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::fs;

    #[actix_web::test]
    async fn test_serves_index_and_admin_pages() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>Home</h1>").unwrap();
        fs::write(dir.path().join("admin.html"), "<h1>Admin</h1>").unwrap();
        let public = dir.path().to_path_buf();

        let app = test::init_service(App::new().configure(|cfg| config(cfg, Some(public.as_path())))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "<h1>Home</h1>");

        let req = test::TestRequest::get().uri("/admin.html").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "<h1>Admin</h1>");

        let req = test::TestRequest::get().uri("/missing.css").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_banner_without_frontend() {
        let app = test::init_service(App::new().configure(|cfg| config(cfg, None))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, BANNER);
    }

    #[actix_web::test]
    async fn test_banner_when_index_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("style.css"), "body {}").unwrap();
        let public = dir.path().to_path_buf();

        let app = test::init_service(App::new().configure(|cfg| config(cfg, Some(public.as_path())))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, BANNER);

        let req = test::TestRequest::get().uri("/style.css").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "body {}");
    }

    #[actix_web::test]
    async fn test_resolve_public_dir() {
        assert!(resolve_public_dir(None).is_none());
        assert!(resolve_public_dir(Some("/definitely/not/here")).is_none());

        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_public_dir(dir.path().to_str()).unwrap();
        assert_eq!(resolved, dir.path());
    }
}
