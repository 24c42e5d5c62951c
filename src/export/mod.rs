// src/export/mod.rs
use serde::{Serialize, Deserialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use crate::models::{OutputFormat, PasswordResult};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// A password row as sent back by the browser.
///
/// Scores are kept as raw JSON values since the client may send them
/// as numbers or strings, or leave them out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExportEntry {
    pub password: String,
    #[schema(value_type = Option<Object>)]
    pub strength: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub entropy: Option<Value>,
}

impl From<&PasswordResult> for ExportEntry {
    fn from(result: &PasswordResult) -> Self {
        Self {
            password: result.password.clone(),
            strength: Some(Value::from(result.strength)),
            entropy: Some(Value::from(result.entropy)),
        }
    }
}

/// A rendered download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

pub fn render(entries: &[ExportEntry], format: OutputFormat) -> Result<ExportFile> {
    let content = match format {
        OutputFormat::Json => render_json(entries)?,
        OutputFormat::Txt => render_txt(entries),
    };

    Ok(ExportFile {
        filename: format!("passwords.{}", format.extension()),
        mime_type: format.mime_type(),
        content,
    })
}

fn render_json(entries: &[ExportEntry]) -> Result<String> {
    #[derive(Serialize)]
    struct PasswordList<'a> {
        passwords: Vec<&'a str>,
    }

    let list = PasswordList {
        passwords: entries.iter().map(|e| e.password.as_str()).collect(),
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    list.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

fn render_txt(entries: &[ExportEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "{} ({}%, {})",
                e.password,
                display_score(e.strength.as_ref()),
                display_score(e.entropy.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_score(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "?".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
