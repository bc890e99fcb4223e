use std::collections::HashMap;

use crate::errors::ServerError;

pub mod announcements;
pub mod board;
pub mod complaints;
pub mod dashboard;
pub mod fees;
pub mod shell;

/// Decoded query string or urlencoded form body.
pub type Params = HashMap<String, String>;

pub fn text(params: &Params, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

/// `?compose=1` style switches.
pub fn flag(params: &Params, key: &str) -> bool {
    matches!(params.get(key).map(String::as_str), Some("1" | "true" | "on" | "yes"))
}

/// An enumerated field that falls back to `default` when absent or blank.
pub fn choice<T>(
    params: &Params,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
) -> Result<T, ServerError> {
    match params.get(key).map(|v| v.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => parse(raw).ok_or_else(|| ServerError::BadRequest(format!("invalid {key} `{raw}`"))),
    }
}

pub fn required_choice<T>(
    params: &Params,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ServerError> {
    let raw = params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("{key} is required")))?;

    parse(raw).ok_or_else(|| ServerError::BadRequest(format!("invalid {key} `{raw}`")))
}
