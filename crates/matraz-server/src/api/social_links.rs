//! Social link endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use matraz_common::include_inactive;
use matraz_content::model::{CreateSocialLink, UpdateSocialLink};
use matraz_content::service::social_link;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
struct ListParams {
    active: Option<String>,
}

#[get("")]
async fn list(data: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    match social_link::list(data.db(), include_inactive(params.active.as_deref())).await {
        Ok(links) => HttpResponse::Ok().json(links),
        Err(err) => handle_service_error(err, "failed to list social links"),
    }
}

#[get("/{id}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match social_link::find_by_id(data.db(), path.into_inner()).await {
        Ok(link) => HttpResponse::Ok().json(link),
        Err(err) => handle_service_error(err, "failed to load social link"),
    }
}

#[post("")]
async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateSocialLink>,
) -> impl Responder {
    authenticated!(req);

    match social_link::create(data.db(), body.into_inner()).await {
        Ok(link) => HttpResponse::Created().json(link),
        Err(err) => handle_service_error(err, "failed to create social link"),
    }
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateSocialLink>,
) -> impl Responder {
    authenticated!(req);

    match social_link::update(data.db(), path.into_inner(), body.into_inner()).await {
        Ok(link) => HttpResponse::Ok().json(link),
        Err(err) => handle_service_error(err, "failed to update social link"),
    }
}

#[delete("/{id}")]
async fn delete_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    authenticated!(req);

    match social_link::delete(data.db(), path.into_inner()).await {
        Ok(()) => response::message_ok("social link deleted successfully"),
        Err(err) => handle_service_error(err, "failed to delete social link"),
    }
}

pub fn routes() -> Scope {
    web::scope("/social-links")
        .service(list)
        .service(create)
        .service(get_one)
        .service(update)
        .service(delete_one)
}
