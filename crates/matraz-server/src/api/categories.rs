//! Category endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use matraz_catalog::model::{CreateCategory, UpdateCategory};
use matraz_catalog::service::category;
use matraz_common::include_inactive;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
struct ListParams {
    active: Option<String>,
}

#[get("")]
async fn list(data: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    match category::list(data.db(), include_inactive(params.active.as_deref())).await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => handle_service_error(err, "failed to list categories"),
    }
}

#[get("/slug/{slug}")]
async fn get_by_slug(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match category::find_by_slug(data.db(), &path.into_inner()).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => handle_service_error(err, "failed to load category"),
    }
}

#[get("/{id}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match category::find_by_id(data.db(), path.into_inner()).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => handle_service_error(err, "failed to load category"),
    }
}

#[post("")]
async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateCategory>,
) -> impl Responder {
    authenticated!(req);

    match category::create(data.db(), body.into_inner()).await {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => handle_service_error(err, "failed to create category"),
    }
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateCategory>,
) -> impl Responder {
    authenticated!(req);

    match category::update(data.db(), path.into_inner(), body.into_inner()).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => handle_service_error(err, "failed to update category"),
    }
}

#[delete("/{id}")]
async fn delete_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    authenticated!(req);

    match category::delete(data.db(), path.into_inner()).await {
        Ok(()) => response::message_ok("category deleted successfully"),
        Err(err) => handle_service_error(err, "failed to delete category"),
    }
}

pub fn routes() -> Scope {
    web::scope("/categories")
        .service(list)
        .service(create)
        .service(get_by_slug)
        .service(get_one)
        .service(update)
        .service(delete_one)
}
