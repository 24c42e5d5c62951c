// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;
use log::{debug, info};
use crate::api::AppState;
use crate::api::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::api::utils::ApiError;
use crate::generators::PasswordGenerator;

/// Generate passwords
///
/// Generates one or more passwords from character counts, a leet-speak phrase
/// or a regex pattern, and scores each one.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated passwords", body = GenerateResponse),
        (status = 400, description = "Invalid options", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn generate(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    if payload.as_object().map_or(true, |obj| obj.is_empty()) {
        return Err(ApiError::BadRequest("Invalid JSON payload".to_string()));
    }

    let request: GenerateRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON payload: {}", e)))?;
    let (options, output_format) = request.into_options(state.max_password_amount)?;
    debug!("🔍 generate called: amount={}, format={}", options.amount, output_format);

    let generator = PasswordGenerator::new(options)?;
    let mode = generator.mode();

    let passwords = web::block(move || generator.generate_batch())
        .await
        .map_err(|e| ApiError::Internal(format!("generation task failed: {}", e)))??;

    info!("✅ Generated {} password(s) in {:?} mode", passwords.len(), mode);
    Ok(HttpResponse::Ok().json(GenerateResponse { passwords }))
}
