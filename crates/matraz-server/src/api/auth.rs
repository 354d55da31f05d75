//! Auth endpoints: register, login, logout, refresh, me

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, get, post, web};
use serde::{Deserialize, Serialize};

use matraz_auth::model::AccountView;
use matraz_auth::service::{account, token};
use matraz_common::validation;
use matraz_persistence::entity::users;

use crate::authenticated;
use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
struct Credentials {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenEnvelope {
    user: AccountView,
    access_token: String,
    refresh_token: String,
    expires_in: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshEnvelope {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest {
    refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct MeBody {
    user: AccountView,
}

/// Build the access/refresh token pair for an account.
fn issue_tokens(data: &AppState, user: &users::Model) -> Result<TokenEnvelope, HttpResponse> {
    let secret = data.configuration.token_secret_key();
    let expires_in = data.configuration.token_expire_seconds();

    let access_token = token::encode_token(&user.email, user.id, &secret, expires_in)
        .map_err(log_token_error)?;
    let refresh_token = token::encode_token(
        &user.email,
        user.id,
        &secret,
        data.configuration.refresh_expire_seconds(),
    )
    .map_err(log_token_error)?;

    Ok(TokenEnvelope {
        user: AccountView::from(user),
        access_token,
        refresh_token,
        expires_in,
    })
}

fn log_token_error(err: jsonwebtoken::errors::Error) -> HttpResponse {
    tracing::error!("failed to issue token: {}", err);
    response::internal_error("failed to issue token")
}

#[post("/register")]
async fn register(data: web::Data<AppState>, body: web::Json<Credentials>) -> impl Responder {
    let email = body.email.clone().unwrap_or_default().trim().to_string();
    let password = body.password.clone().unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return response::bad_request("email and password are required");
    }
    if validation::validate_email(&email).is_err() {
        return response::bad_request("invalid email address");
    }
    if validation::validate_password(&password).is_err() {
        return response::bad_request("password must be between 6 and 72 characters");
    }

    let user = match account::register(data.db(), &email, &password).await {
        Ok(user) => user,
        Err(err) => return handle_service_error(err, "failed to register user"),
    };

    match issue_tokens(&data, &user) {
        Ok(envelope) => HttpResponse::Created().json(envelope),
        Err(error_response) => error_response,
    }
}

#[post("/login")]
async fn login(data: web::Data<AppState>, body: web::Json<Credentials>) -> impl Responder {
    let email = body.email.clone().unwrap_or_default().trim().to_string();
    let password = body.password.clone().unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return response::bad_request("email and password are required");
    }

    let user = match account::authenticate(data.db(), &email, &password).await {
        Ok(user) => user,
        Err(err) => return handle_service_error(err, "failed to log in"),
    };

    match issue_tokens(&data, &user) {
        Ok(envelope) => HttpResponse::Ok().json(envelope),
        Err(error_response) => error_response,
    }
}

#[post("/logout")]
async fn logout(req: HttpRequest) -> impl Responder {
    authenticated!(req);

    // Tokens are stateless; logout exists so clients have a uniform flow
    response::message_ok("session closed successfully")
}

#[post("/refresh")]
async fn refresh(data: web::Data<AppState>, body: web::Json<RefreshRequest>) -> impl Responder {
    let refresh_token = match body.refresh_token.clone().filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => return response::unauthorized("refresh token required"),
    };

    let claims = match token::decode_token(&refresh_token, &data.configuration.token_secret_key())
    {
        Ok(claims) => claims,
        Err(_) => return response::unauthorized("invalid or expired token"),
    };

    let user = match account::find_by_id(data.db(), claims.uid).await {
        Ok(Some(user)) => user,
        Ok(None) => return response::not_found("user not found"),
        Err(err) => return handle_service_error(err, "failed to load user"),
    };

    let expires_in = data.configuration.token_expire_seconds();
    match token::encode_token(
        &user.email,
        user.id,
        &data.configuration.token_secret_key(),
        expires_in,
    ) {
        Ok(access_token) => HttpResponse::Ok().json(RefreshEnvelope {
            access_token,
            expires_in,
        }),
        Err(err) => log_token_error(err),
    }
}

#[get("/me")]
async fn me(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let ctx = authenticated!(req);
    let user_id = match ctx.user_id {
        Some(id) => id,
        None => return response::unauthorized("authentication required"),
    };

    match account::find_by_id(data.db(), user_id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(MeBody {
            user: AccountView::from(user),
        }),
        Ok(None) => response::not_found("user not found"),
        Err(err) => handle_service_error(err, "failed to load user"),
    }
}

pub fn routes() -> Scope {
    web::scope("/auth")
        .service(register)
        .service(login)
        .service(logout)
        .service(refresh)
        .service(me)
}
