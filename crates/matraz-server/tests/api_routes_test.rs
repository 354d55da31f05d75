//! HTTP-level tests over the full middleware + routing stack.
//!
//! The database is a SeaORM mock, so these exercise routing, auth
//! gating, CORS, and response shapes without a running PostgreSQL.

use std::sync::Arc;

use actix_web::{App, http::Method, http::StatusCode, http::header, test, web};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use matraz_persistence::entity::{categories, heroes};
use matraz_server::{
    api,
    middleware::{auth::Authentication, cors::Cors},
    model::{AppState, Configuration},
};

fn app_state(db: DatabaseConnection) -> Arc<AppState> {
    Arc::new(AppState::new(Configuration::default(), db))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(Cors::new(Vec::new()))
                .wrap(Authentication)
                .app_data(web::Data::from($state))
                .service(api::health::health)
                .service(api::route::routes())
                .default_service(web::route().to(api::route::not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_endpoint() {
    let state = app_state(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let state = app_state(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/no-such-thing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "route not found");
}

#[actix_web::test]
async fn test_mutation_requires_token() {
    let state = app_state(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(serde_json::json!({"name": "Glassware", "slug": "glassware"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "authentication required");
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let state = app_state(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
        .set_json(serde_json::json!({"name": "Glassware", "slug": "glassware"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid token");
}

#[actix_web::test]
async fn test_category_create_with_valid_token() {
    let created = categories::Model {
        id: 1,
        name: "Glassware".to_string(),
        description: String::new(),
        slug: "glassware".to_string(),
        icon_url: String::new(),
        position: 0,
        active: true,
        created_at: chrono::Utc::now(),
        updated_at: None,
    };
    // First query: slug uniqueness check; second: INSERT .. RETURNING
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<categories::Model>::new(), vec![created]])
        .into_connection();
    let state = app_state(db);
    let app = test_app!(state);

    // Configuration::default() has an empty secret; sign with the same
    let token = matraz_auth::service::token::encode_token("admin@example.com", 1, "", 3600).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(serde_json::json!({"name": "Glassware", "slug": "glassware"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["slug"], "glassware");
}

#[actix_web::test]
async fn test_category_list_public() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<categories::Model>::new()])
        .into_connection();
    let state = app_state(db);
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_hero_by_section() {
    let hero = heroes::Model {
        id: 3,
        section: "home".to_string(),
        title: "Equipa tu laboratorio".to_string(),
        subtitle: String::new(),
        image_url: String::new(),
        cta_text: String::new(),
        cta_link: String::new(),
        active: true,
        created_at: chrono::Utc::now(),
        updated_at: None,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![hero]])
        .into_connection();
    let state = app_state(db);
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/heroes/section/home")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["section"], "home");
    assert_eq!(body["title"], "Equipa tu laboratorio");
}

#[actix_web::test]
async fn test_login_requires_credentials() {
    let state = app_state(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email and password are required");
}

#[actix_web::test]
async fn test_options_preflight_short_circuits() {
    let state = app_state(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    let app = test_app!(state);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/products")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}
