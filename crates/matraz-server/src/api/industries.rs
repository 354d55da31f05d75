//! Industry endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use matraz_common::include_inactive;
use matraz_content::model::{CreateIndustry, UpdateIndustry};
use matraz_content::service::industry;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
struct ListParams {
    active: Option<String>,
}

#[get("")]
async fn list(data: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    match industry::list(data.db(), include_inactive(params.active.as_deref())).await {
        Ok(industries) => HttpResponse::Ok().json(industries),
        Err(err) => handle_service_error(err, "failed to list industries"),
    }
}

#[get("/{id}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match industry::find_by_id(data.db(), path.into_inner()).await {
        Ok(industry) => HttpResponse::Ok().json(industry),
        Err(err) => handle_service_error(err, "failed to load industry"),
    }
}

#[post("")]
async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateIndustry>,
) -> impl Responder {
    authenticated!(req);

    match industry::create(data.db(), body.into_inner()).await {
        Ok(industry) => HttpResponse::Created().json(industry),
        Err(err) => handle_service_error(err, "failed to create industry"),
    }
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateIndustry>,
) -> impl Responder {
    authenticated!(req);

    match industry::update(data.db(), path.into_inner(), body.into_inner()).await {
        Ok(industry) => HttpResponse::Ok().json(industry),
        Err(err) => handle_service_error(err, "failed to update industry"),
    }
}

#[delete("/{id}")]
async fn delete_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    authenticated!(req);

    match industry::delete(data.db(), path.into_inner()).await {
        Ok(()) => response::message_ok("industry deleted successfully"),
        Err(err) => handle_service_error(err, "failed to delete industry"),
    }
}

pub fn routes() -> Scope {
    web::scope("/industries")
        .service(list)
        .service(create)
        .service(get_one)
        .service(update)
        .service(delete_one)
}
