use std::time::Duration;

use actix_web::{get, post, web, HttpResponse};
use auth_core::{IssueError, TokenService};

use crate::configuration::TokenSettings;

#[get("/health_check")]
pub async fn health_check() -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().finish())
}

#[get("/")]
pub async fn index() -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().finish())
}

#[derive(serde::Deserialize)]
pub struct TokenRequest {
    subject_id: String,
    // Falls back to the configured default when absent.
    validity_secs: Option<u64>,
}

#[derive(serde::Serialize)]
pub struct TokenResponse {
    token: String,
    subject_id: String,
    expires_in_secs: u64,
}

#[post("/token")]
pub async fn issue_token(
    request: web::Json<TokenRequest>,
    service: web::Data<TokenService>,
    settings: web::Data<TokenSettings>,
) -> Result<HttpResponse, actix_web::Error> {
    let validity_secs = request
        .validity_secs
        .unwrap_or(settings.default_validity_secs);

    match service.issue(&request.subject_id, Duration::from_secs(validity_secs)) {
        Ok(token) => Ok(HttpResponse::Ok().json(TokenResponse {
            token: token.into_inner(),
            subject_id: request.subject_id.clone(),
            expires_in_secs: validity_secs,
        })),
        Err(IssueError::InvalidSubject) => {
            tracing::warn!("token request refused: empty subject id");
            Ok(HttpResponse::BadRequest().body("subject id must not be empty"))
        }
    }
}
