// src/api/handlers/download.rs

use actix_web::{web, HttpResponse, http::header};
use serde_json::Value;
use log::info;
use crate::api::types::{DownloadRequest, ErrorResponse};
use crate::api::utils::ApiError;
use crate::export;
use crate::models::OutputFormat;

/// Download generated passwords
///
/// Returns the posted passwords as a `passwords.txt` or `passwords.json`
/// attachment.
#[utoipa::path(
    post,
    path = "/download",
    tag = "Generator",
    request_body = DownloadRequest,
    responses(
        (status = 200, description = "Password file", content_type = "text/plain"),
        (status = 400, description = "Missing list or bad format", body = ErrorResponse),
        (status = 500, description = "Failed to create download", body = ErrorResponse)
    )
)]
pub async fn download(payload: web::Json<Value>) -> Result<HttpResponse, ApiError> {
    let request: DownloadRequest = serde_json::from_value(payload.into_inner())
        .map_err(|e| ApiError::BadRequest(format!("Invalid passwords list: {}", e)))?;

    let entries = request
        .passwords
        .ok_or_else(|| ApiError::BadRequest("Missing passwords list".to_string()))?;

    let format = match request.format.as_deref() {
        None => OutputFormat::Txt,
        Some(raw) => raw.parse().map_err(ApiError::BadRequest)?,
    };

    let file = export::render(&entries, format)?;
    info!("✅ Prepared {} with {} password(s)", file.filename, entries.len());

    Ok(HttpResponse::Ok()
        .content_type(format!("{}; charset=utf-8", file.mime_type))
        .append_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        ))
        .body(file.content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App, http::StatusCode};
    use serde_json::json;
    use crate::api::{routes, utils::json_config, AppState};

    async fn post(payload: Value) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::for_tests(10)))
                .app_data(json_config())
                .configure(routes::configure_routes),
        )
        .await;
        let req = test::TestRequest::post().uri("/download").set_json(payload).to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn txt_download_is_an_attachment() {
        let resp = post(json!({
            "passwords": [
                { "password": "abc", "strength": 10, "entropy": 14.1 },
                { "password": "def" }
            ],
            "format": "txt"
        }))
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        assert_eq!(disposition, "attachment; filename=\"passwords.txt\"");
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));

        let body = test::read_body(resp).await;
        assert_eq!(body, "abc (10%, 14.1)\ndef (?%, ?)");
    }

    #[actix_web::test]
    async fn json_download_lists_passwords() {
        let resp = post(json!({
            "passwords": [{ "password": "abc", "strength": 10, "entropy": 14.1 }],
            "format": "JSON"
        }))
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        assert_eq!(disposition, "attachment; filename=\"passwords.json\"");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "passwords": ["abc"] }));
    }

    #[actix_web::test]
    async fn rejects_missing_list_and_unknown_format() {
        let resp = post(json!({ "format": "txt" })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Missing passwords list");

        let resp = post(json!({ "passwords": [], "format": "xml" })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "format must be 'txt' or 'json'");
    }
}
