//! Supplier endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use matraz_catalog::model::{CreateSupplier, UpdateSupplier};
use matraz_catalog::service::supplier;
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
    match supplier::list(data.db(), include_inactive(params.active.as_deref())).await {
        Ok(suppliers) => HttpResponse::Ok().json(suppliers),
        Err(err) => handle_service_error(err, "failed to list suppliers"),
    }
}

#[get("/{id}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match supplier::find_by_id(data.db(), path.into_inner()).await {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => handle_service_error(err, "failed to load supplier"),
    }
}

#[post("")]
async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateSupplier>,
) -> impl Responder {
    authenticated!(req);

    match supplier::create(data.db(), body.into_inner()).await {
        Ok(supplier) => HttpResponse::Created().json(supplier),
        Err(err) => handle_service_error(err, "failed to create supplier"),
    }
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateSupplier>,
) -> impl Responder {
    authenticated!(req);

    match supplier::update(data.db(), path.into_inner(), body.into_inner()).await {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => handle_service_error(err, "failed to update supplier"),
    }
}

#[delete("/{id}")]
async fn delete_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    authenticated!(req);

    match supplier::delete(data.db(), path.into_inner()).await {
        Ok(()) => response::message_ok("supplier deleted successfully"),
        Err(err) => handle_service_error(err, "failed to delete supplier"),
    }
}

pub fn routes() -> Scope {
    web::scope("/suppliers")
        .service(list)
        .service(create)
        .service(get_one)
        .service(update)
        .service(delete_one)
}
