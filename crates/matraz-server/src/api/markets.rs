//! Market endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use matraz_common::include_inactive;
use matraz_content::model::{CreateMarket, UpdateMarket};
use matraz_content::service::market;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
struct ListParams {
    active: Option<String>,
}

#[get("")]
async fn list(data: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    match market::list(data.db(), include_inactive(params.active.as_deref())).await {
        Ok(markets) => HttpResponse::Ok().json(markets),
        Err(err) => handle_service_error(err, "failed to list markets"),
    }
}

#[get("/slug/{slug}")]
async fn get_by_slug(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match market::find_by_slug(data.db(), &path.into_inner()).await {
        Ok(market) => HttpResponse::Ok().json(market),
        Err(err) => handle_service_error(err, "failed to load market"),
    }
}

#[get("/{id}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match market::find_by_id(data.db(), path.into_inner()).await {
        Ok(market) => HttpResponse::Ok().json(market),
        Err(err) => handle_service_error(err, "failed to load market"),
    }
}

#[post("")]
async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateMarket>,
) -> impl Responder {
    authenticated!(req);

    match market::create(data.db(), body.into_inner()).await {
        Ok(market) => HttpResponse::Created().json(market),
        Err(err) => handle_service_error(err, "failed to create market"),
    }
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateMarket>,
) -> impl Responder {
    authenticated!(req);

    match market::update(data.db(), path.into_inner(), body.into_inner()).await {
        Ok(market) => HttpResponse::Ok().json(market),
        Err(err) => handle_service_error(err, "failed to update market"),
    }
}

#[delete("/{id}")]
async fn delete_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    authenticated!(req);

    match market::delete(data.db(), path.into_inner()).await {
        Ok(()) => response::message_ok("market deleted successfully"),
        Err(err) => handle_service_error(err, "failed to delete market"),
    }
}

pub fn routes() -> Scope {
    web::scope("/markets")
        .service(list)
        .service(create)
        .service(get_by_slug)
        .service(get_one)
        .service(update)
        .service(delete_one)
}
