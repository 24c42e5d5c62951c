// src/api/handlers/pwned.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;
use log::info;
use crate::api::AppState;
use crate::api::types::{CheckPwnedRequest, ErrorResponse};
use crate::api::utils::ApiError;
use crate::models::PwnedReport;

/// Check a password against known breaches
///
/// Uses the k-anonymity range API: only the first five characters of the
/// SHA-1 hash are sent upstream. Upstream failures are reported with
/// status `Error` and a 200 response.
#[utoipa::path(
    post,
    path = "/check_pwned",
    tag = "Breach check",
    request_body = CheckPwnedRequest,
    responses(
        (status = 200, description = "Breach report", body = PwnedReport),
        (status = 400, description = "Missing or empty password", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn check_pwned(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let password = match payload.get("password") {
        None => return Err(ApiError::BadRequest("Password is required".to_string())),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(_) => {
            return Err(ApiError::BadRequest("Password must be a non-empty string".to_string()))
        }
    };

    let report = state.checker.check(&password).await;
    info!("✅ Breach check finished with status {}", report.status);

    Ok(HttpResponse::Ok().json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App, http::StatusCode};
    use serde_json::json;
    use crate::api::{routes, utils::json_config};
    use crate::models::PwnedStatus;

    #[actix_web::test]
    async fn rejects_missing_or_blank_password() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::for_tests(10)))
                .app_data(json_config())
                .configure(routes::configure_routes),
        )
        .await;

        let cases = [
            (json!({}), "Password is required"),
            (json!({ "other": "x" }), "Password is required"),
            (json!({ "password": "   " }), "Password must be a non-empty string"),
            (json!({ "password": 1234 }), "Password must be a non-empty string"),
        ];

        for (payload, expected) in cases {
            let req = test::TestRequest::post().uri("/check_pwned").set_json(&payload).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.error, expected);
        }
    }

    #[actix_web::test]
    async fn upstream_failure_is_reported_not_raised() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::for_tests(10)))
                .app_data(json_config())
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/check_pwned")
            .set_json(json!({ "password": "hunter2" }))
            .to_request();
        let report: PwnedReport = test::call_and_read_body_json(&app, req).await;

        assert_eq!(report.status, PwnedStatus::Error);
        assert_eq!(report.color, "red");
    }
}
