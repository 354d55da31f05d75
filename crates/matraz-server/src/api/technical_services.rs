//! Technical service endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use matraz_common::include_inactive;
use matraz_content::model::{CreateTechnicalService, UpdateTechnicalService};
use matraz_content::service::technical_service;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
struct ListParams {
    active: Option<String>,
}

#[get("")]
async fn list(data: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    match technical_service::list(data.db(), include_inactive(params.active.as_deref())).await {
        Ok(services) => HttpResponse::Ok().json(services),
        Err(err) => handle_service_error(err, "failed to list technical services"),
    }
}

#[get("/{id}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match technical_service::find_by_id(data.db(), path.into_inner()).await {
        Ok(service) => HttpResponse::Ok().json(service),
        Err(err) => handle_service_error(err, "failed to load technical service"),
    }
}

#[post("")]
async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateTechnicalService>,
) -> impl Responder {
    authenticated!(req);

    match technical_service::create(data.db(), body.into_inner()).await {
        Ok(service) => HttpResponse::Created().json(service),
        Err(err) => handle_service_error(err, "failed to create technical service"),
    }
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateTechnicalService>,
) -> impl Responder {
    authenticated!(req);

    match technical_service::update(data.db(), path.into_inner(), body.into_inner()).await {
        Ok(service) => HttpResponse::Ok().json(service),
        Err(err) => handle_service_error(err, "failed to update technical service"),
    }
}

#[delete("/{id}")]
async fn delete_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    authenticated!(req);

    match technical_service::delete(data.db(), path.into_inner()).await {
        Ok(()) => response::message_ok("technical service deleted successfully"),
        Err(err) => handle_service_error(err, "failed to delete technical service"),
    }
}

pub fn routes() -> Scope {
    web::scope("/technical-services")
        .service(list)
        .service(create)
        .service(get_one)
        .service(update)
        .service(delete_one)
}
