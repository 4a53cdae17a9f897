use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::error::{ServiceError, ServiceResult};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is valid")
});

/// Field must be present and a JSON string.
pub fn require_string<'a>(value: Option<&'a Value>, field: &str) -> ServiceResult<&'a str> {
    match value {
        Some(Value::String(s)) => Ok(s.as_str()),
        _ => Err(ServiceError::bad_request(format!(
            "Campo '{}' inválido ou faltando: deve ser uma string",
            field
        ))),
    }
}

/// Length is counted in characters, not bytes.
pub fn require_min_length(value: &str, field: &str, min: usize) -> ServiceResult<()> {
    if value.chars().count() < min {
        return Err(ServiceError::bad_request(format!(
            "Campo '{}' inválido: mínimo de {} caracteres",
            field, min
        )));
    }
    Ok(())
}

pub fn require_email(value: &str) -> ServiceResult<()> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ServiceError::bad_request("Campo 'email' inválido"));
    }
    Ok(())
}

/// A token counts as present only if it has non-whitespace content.
pub fn present_token(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}
