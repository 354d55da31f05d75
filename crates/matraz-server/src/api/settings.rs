//! Settings endpoints
//!
//! Settings are read publicly (the site needs them to render) and
//! written only by admins.

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, get, put, web};
use serde::Deserialize;

use matraz_content::service::settings;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::handle_service_error;

#[derive(Debug, Deserialize)]
struct SettingValue {
    value: Option<String>,
}

#[get("")]
async fn list(data: web::Data<AppState>) -> impl Responder {
    match settings::list(data.db()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => handle_service_error(err, "failed to list settings"),
    }
}

#[get("/{key}")]
async fn get_one(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match settings::find_by_key(data.db(), &path.into_inner()).await {
        Ok(setting) => HttpResponse::Ok().json(setting),
        Err(err) => handle_service_error(err, "failed to load setting"),
    }
}

#[put("/{key}")]
async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SettingValue>,
) -> impl Responder {
    authenticated!(req);

    match settings::update(data.db(), &path.into_inner(), body.value.clone()).await {
        Ok(setting) => HttpResponse::Ok().json(setting),
        Err(err) => handle_service_error(err, "failed to update setting"),
    }
}

pub fn routes() -> Scope {
    web::scope("/settings")
        .service(list)
        .service(get_one)
        .service(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_value_accepts_null() {
        let body: SettingValue = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert!(body.value.is_none());

        let body: SettingValue = serde_json::from_str(r#"{"value": "hola"}"#).unwrap();
        assert_eq!(body.value.as_deref(), Some("hola"));
    }
}
