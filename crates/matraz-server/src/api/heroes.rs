//! Hero banner endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use matraz_common::include_inactive;
use matraz_content::model::{CreateHero, UpdateHero};
use matraz_content::service::hero;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
struct ListParams {
    active: Option<String>,
}

#[get("")]
async fn list(data: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    match hero::list(data.db(), include_inactive(params.active.as_deref())).await {
        Ok(heroes) => HttpResponse::Ok().json(heroes),
        Err(err) => handle_service_error(err, "failed to list heroes"),
    }
}

#[get("/section/{section}")]
async fn get_by_section(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match hero::find_by_section(data.db(), &path.into_inner()).await {
        Ok(hero) => HttpResponse::Ok().json(hero),
        Err(err) => handle_service_error(err, "failed to load hero"),
    }
}

#[get("/{id}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match hero::find_by_id(data.db(), path.into_inner()).await {
        Ok(hero) => HttpResponse::Ok().json(hero),
        Err(err) => handle_service_error(err, "failed to load hero"),
    }
}

#[post("")]
async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateHero>,
) -> impl Responder {
    authenticated!(req);

    match hero::create(data.db(), body.into_inner()).await {
        Ok(hero) => HttpResponse::Created().json(hero),
        Err(err) => handle_service_error(err, "failed to create hero"),
    }
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateHero>,
) -> impl Responder {
    authenticated!(req);

    match hero::update(data.db(), path.into_inner(), body.into_inner()).await {
        Ok(hero) => HttpResponse::Ok().json(hero),
        Err(err) => handle_service_error(err, "failed to update hero"),
    }
}

#[delete("/{id}")]
async fn delete_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    authenticated!(req);

    match hero::delete(data.db(), path.into_inner()).await {
        Ok(()) => response::message_ok("hero deleted successfully"),
        Err(err) => handle_service_error(err, "failed to delete hero"),
    }
}

pub fn routes() -> Scope {
    web::scope("/heroes")
        .service(list)
        .service(create)
        .service(get_by_section)
        .service(get_one)
        .service(update)
        .service(delete_one)
}
