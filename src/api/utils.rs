// src/api/utils.rs

use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse, ResponseError};
use log::{error, warn};
use serde_json::Value;
use thiserror::Error;
use crate::export::ExportError;
use crate::generators::GenerateError;
use super::types::ErrorResponse;

/// Errors surfaced to HTTP clients as `{ "error": ... }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to create download")]
    Download(#[from] ExportError),

    #[error("Internal server error")]
    Internal(String),
}

impl From<GenerateError> for ApiError {
    fn from(e: GenerateError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Download(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(msg) => warn!("❌ Rejected request: {}", msg),
            ApiError::Download(e) => error!("❌ Download rendering failed: {}", e),
            ApiError::Internal(detail) => error!("❌ Unexpected error: {}", detail),
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// JSON extractor config that answers malformed bodies with the API error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("❌ Invalid JSON payload: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new("Invalid JSON payload"));
        InternalError::from_response(err, response).into()
    })
}

/// Read an integer field that may arrive as a JSON number or a numeric string.
pub fn get_int(value: Option<&Value>, key: &str, default: usize, min: usize) -> Result<usize, ApiError> {
    let invalid = || ApiError::BadRequest(format!("'{}' must be an integer >= {}", key, min));

    let parsed: i64 = match value {
        None => return Ok(default),
        Some(v) => value_as_i64(v).ok_or_else(invalid)?,
    };

    if parsed < min as i64 {
        return Err(invalid());
    }
    usize::try_from(parsed).map_err(|_| invalid())
}

/// Optional RNG seed; empty values mean "no seed".
pub fn parse_seed(value: Option<&Value>) -> Result<Option<u64>, ApiError> {
    let invalid = || ApiError::BadRequest("seed must be an integer".to_string());

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::Number(n)) if n.as_u64() == Some(0) => Ok(None),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<u64>()
                .or_else(|_| s.parse::<i64>().map(|i| i as u64))
                .map(Some)
                .map_err(|_| invalid())
        }
        Some(v @ Value::Number(_)) => value_as_i64(v).map(|i| Some(i as u64)).ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_int_accepts_numbers_and_strings() {
        assert_eq!(get_int(Some(&json!(7)), "amount", 1, 1).unwrap(), 7);
        assert_eq!(get_int(Some(&json!(" 12 ")), "amount", 1, 1).unwrap(), 12);
        assert_eq!(get_int(Some(&json!(3.9)), "numbers", 0, 0).unwrap(), 3);
        assert_eq!(get_int(None, "amount", 1, 1).unwrap(), 1);
    }

    #[test]
    fn get_int_rejects_below_minimum_and_garbage() {
        let err = get_int(Some(&json!("0")), "amount", 1, 1).unwrap_err();
        assert_eq!(err.to_string(), "'amount' must be an integer >= 1");

        let err = get_int(Some(&json!("")), "numbers", 0, 0).unwrap_err();
        assert_eq!(err.to_string(), "'numbers' must be an integer >= 0");

        assert!(get_int(Some(&json!(-2)), "numbers", 0, 0).is_err());
        assert!(get_int(Some(&json!(null)), "numbers", 0, 0).is_err());
        assert!(get_int(Some(&json!(true)), "numbers", 0, 0).is_err());
    }

    #[test]
    fn parse_seed_treats_empty_as_unseeded() {
        assert_eq!(parse_seed(None).unwrap(), None);
        assert_eq!(parse_seed(Some(&json!(""))).unwrap(), None);
        assert_eq!(parse_seed(Some(&json!(null))).unwrap(), None);
        assert_eq!(parse_seed(Some(&json!(0))).unwrap(), None);
    }

    #[test]
    fn parse_seed_reads_integers() {
        assert_eq!(parse_seed(Some(&json!("42"))).unwrap(), Some(42));
        assert_eq!(parse_seed(Some(&json!(42))).unwrap(), Some(42));
        assert_eq!(parse_seed(Some(&json!("0"))).unwrap(), Some(0));
        assert_eq!(parse_seed(Some(&json!("-1"))).unwrap(), Some(u64::MAX));
    }

    #[test]
    fn parse_seed_rejects_text() {
        let err = parse_seed(Some(&json!("abc"))).unwrap_err();
        assert_eq!(err.to_string(), "seed must be an integer");
    }
}
