//! Product endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use matraz_catalog::model::{CreateProduct, ProductFilter, UpdateProduct};
use matraz_catalog::service::product;
use matraz_common::include_inactive;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
struct ListParams {
    active: Option<String>,
    category: Option<String>,
    featured: Option<String>,
}

#[get("")]
async fn list(data: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    let filter = ProductFilter {
        include_inactive: include_inactive(params.active.as_deref()),
        category_slug: params.category.clone().filter(|s| !s.is_empty()),
        featured_only: params.featured.as_deref() == Some("true"),
    };

    match product::list(data.db(), &filter).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => handle_service_error(err, "failed to list products"),
    }
}

#[get("/{id}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match product::get(data.db(), path.into_inner()).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => handle_service_error(err, "failed to load product"),
    }
}

#[post("")]
async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateProduct>,
) -> impl Responder {
    authenticated!(req);

    match product::create(data.db(), body.into_inner()).await {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => handle_service_error(err, "failed to create product"),
    }
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateProduct>,
) -> impl Responder {
    authenticated!(req);

    match product::update(data.db(), path.into_inner(), body.into_inner()).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => handle_service_error(err, "failed to update product"),
    }
}

#[delete("/{id}")]
async fn delete_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    authenticated!(req);

    match product::delete(data.db(), path.into_inner()).await {
        Ok(()) => response::message_ok("product deleted successfully"),
        Err(err) => handle_service_error(err, "failed to delete product"),
    }
}

pub fn routes() -> Scope {
    web::scope("/products")
        .service(list)
        .service(create)
        .service(get_one)
        .service(update)
        .service(delete_one)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_deserialization() {
        let params: ListParams =
            serde_json::from_str(r#"{"active": "false", "featured": "true"}"#).unwrap();
        assert!(include_inactive(params.active.as_deref()));
        assert_eq!(params.featured.as_deref(), Some("true"));
        assert!(params.category.is_none());
    }
}
