// src/api/types.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use crate::export::ExportEntry;
use crate::models::{OutputFormat, PasswordGenerationOptions, PasswordResult};
use super::utils::{get_int, parse_seed, ApiError};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Body of `POST /generate`.
///
/// Numeric fields accept numbers or numeric strings since the browser
/// posts raw form values. A field sent as `null` is kept as `Some(Value::Null)`
/// so validation can tell it apart from an absent field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Number of digits
    #[schema(value_type = Option<String>, example = "2")]
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub numbers: Option<Value>,
    /// Number of lowercase letters
    #[schema(value_type = Option<String>, example = "4")]
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<Value>,
    /// Number of uppercase letters
    #[schema(value_type = Option<String>, example = "4")]
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub uppercase: Option<Value>,
    /// Number of punctuation characters
    #[schema(value_type = Option<String>, example = "2")]
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub special_chars: Option<Value>,
    /// How many passwords to generate
    #[schema(value_type = Option<String>, example = "5")]
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
    /// Exact final length including prefix and suffix, 0 for none
    #[schema(value_type = Option<String>, example = "16")]
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub total_length: Option<Value>,
    /// Pattern the random part must match
    #[serde(default)]
    pub regex: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Text converted to leet-speak
    #[serde(default)]
    pub custom: String,
    /// Characters that must never appear
    #[serde(default)]
    pub exclude_chars: String,
    /// `txt` or `json`
    pub output_format: Option<String>,
    /// Integer seed for reproducible output
    #[schema(value_type = Option<String>)]
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub seed: Option<Value>,
}

// Keep an explicit `null` distinct from a missing field
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl GenerateRequest {
    /// Validate the request and turn it into generator options.
    pub fn into_options(self, max_amount: usize) -> Result<(PasswordGenerationOptions, OutputFormat), ApiError> {
        let numbers = get_int(self.numbers.as_ref(), "numbers", 0, 0)?;
        let lowercase = get_int(self.lowercase.as_ref(), "lowercase", 0, 0)?;
        let uppercase = get_int(self.uppercase.as_ref(), "uppercase", 0, 0)?;
        let special_chars = get_int(self.special_chars.as_ref(), "special_chars", 0, 0)?;
        let amount = get_int(self.amount.as_ref(), "amount", 1, 1)?;
        let total_length = get_int(self.total_length.as_ref(), "total_length", 0, 0)?;

        if amount > max_amount {
            return Err(ApiError::BadRequest(format!("'amount' must be at most {}", max_amount)));
        }

        let output_format = match self.output_format.as_deref() {
            None => OutputFormat::Txt,
            Some(raw) => raw
                .parse()
                .map_err(|_| ApiError::BadRequest("output_format must be 'txt' or 'json'".to_string()))?,
        };

        let options = PasswordGenerationOptions {
            numbers,
            lowercase,
            uppercase,
            special_chars,
            total_length,
            prefix: self.prefix.trim().to_string(),
            suffix: self.suffix.trim().to_string(),
            custom: self.custom.trim().to_string(),
            regex: self.regex.trim().to_string(),
            exclude_chars: self.exclude_chars.trim().to_string(),
            amount,
            seed: parse_seed(self.seed.as_ref())?,
        };

        Ok((options, output_format))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub passwords: Vec<PasswordResult>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckPwnedRequest {
    /// Password to look up; only a hash prefix is sent upstream
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DownloadRequest {
    /// Rows as returned by `/generate`
    pub passwords: Option<Vec<ExportEntry>>,
    /// `txt` (default) or `json`
    pub format: Option<String>,
}
