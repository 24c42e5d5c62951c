// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use std::fmt;
use std::str::FromStr;

/// One generated password together with its scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PasswordResult {
    pub password: String,
    /// Heuristic strength, 0-100
    pub strength: u8,
    /// Estimated entropy in bits, rounded to two decimals
    pub entropy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" => Ok(OutputFormat::Txt),
            "json" => Ok(OutputFormat::Json),
            _ => Err("format must be 'txt' or 'json'".to_string()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Character classes a password can draw from, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digits,
    Lowercase,
    Uppercase,
    Special,
}

pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Digits,
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Special,
    ];

    pub fn pool(&self) -> &'static str {
        match self {
            CharClass::Digits => "0123456789",
            CharClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Special => ASCII_PUNCTUATION,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Digits => "digits",
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Special => "special",
        };
        f.write_str(name)
    }
}

// Password generation options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordGenerationOptions {
    pub numbers: usize,
    pub lowercase: usize,
    pub uppercase: usize,
    pub special_chars: usize,
    /// 0 means "no length constraint"
    pub total_length: usize,
    pub prefix: String,
    pub suffix: String,
    /// Text converted to leet-speak
    pub custom: String,
    /// Pattern the generated body must match
    pub regex: String,
    pub exclude_chars: String,
    pub amount: usize,
    pub seed: Option<u64>,
}

impl PasswordGenerationOptions {
    pub fn count_for(&self, class: CharClass) -> usize {
        match class {
            CharClass::Digits => self.numbers,
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Special => self.special_chars,
        }
    }

    pub fn counts_total(&self) -> usize {
        CharClass::ALL.iter().map(|c| self.count_for(*c)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PwnedStatus {
    Found,
    #[serde(rename = "Not Found")]
    NotFound,
    Error,
}

impl fmt::Display for PwnedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwnedStatus::Found => write!(f, "Found"),
            PwnedStatus::NotFound => write!(f, "Not Found"),
            PwnedStatus::Error => write!(f, "Error"),
        }
    }
}

/// Outcome of a breach lookup as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PwnedReport {
    pub status: PwnedStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach_count: Option<String>,
    pub message: String,
    pub color: String,
}

impl PwnedReport {
    pub fn found(sha1: &str, count: &str) -> Self {
        Self {
            status: PwnedStatus::Found,
            sha1: Some(sha1.to_lowercase()),
            breach_count: Some(count.to_string()),
            message: "Identified in data breaches. Change this password immediately.".to_string(),
            color: "red".to_string(),
        }
    }

    pub fn not_found(sha1: &str) -> Self {
        Self {
            status: PwnedStatus::NotFound,
            sha1: Some(sha1.to_lowercase()),
            breach_count: Some("0".to_string()),
            message: "Not detected in any known breaches.".to_string(),
            color: "green".to_string(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: PwnedStatus::Error,
            sha1: None,
            breach_count: None,
            message,
            color: "red".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" txt ".parse::<OutputFormat>(), Ok(OutputFormat::Txt));
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn punctuation_pool_matches_ascii_punctuation() {
        let expected: String = (0u8..128)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert_eq!(CharClass::Special.pool(), expected);
    }

    #[test]
    fn not_found_status_serializes_with_space() {
        let report = PwnedReport::not_found("ABCDEF");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "Not Found");
        assert_eq!(json["sha1"], "abcdef");
        assert_eq!(json["breach_count"], "0");
    }

    #[test]
    fn error_report_omits_hash_fields() {
        let json = serde_json::to_value(PwnedReport::error("boom".into())).unwrap();
        assert!(json.get("sha1").is_none());
        assert!(json.get("breach_count").is_none());
        assert_eq!(json["color"], "red");
    }
}
