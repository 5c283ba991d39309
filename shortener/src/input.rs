//! Form input normalization and validation.
//!
//! Each builder trims its inputs, runs the `validator` rules declared on the
//! request DTO, and reports the first failing field in form order.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use validator::{Validate, ValidationErrors};

use crate::types::{CreateUrlRequest, LoginRequest, RegisterRequest};

pub const HTTPS_PREFIX: &str = "https://";
pub const HTTP_PREFIX: &str = "http://";

/// Protocols offered by the create form, default first.
pub const PROTOCOLS: [&str; 2] = [HTTPS_PREFIX, HTTP_PREFIX];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a URL")]
    EmptyUrl,
    #[error("{message}")]
    Invalid { field: &'static str, message: String },
}

/// Trim `raw` and prepend `protocol` unless it already carries an
/// `http://`/`https://` scheme (case-insensitive).
#[must_use]
pub fn normalize_url(protocol: &str, raw: &str) -> String {
    let trimmed = raw.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_owned()
    } else {
        format!("{protocol}{trimmed}")
    }
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with(HTTP_PREFIX) || lower.starts_with(HTTPS_PREFIX)
}

/// Build a create-URL request from the protocol selector and URL field.
///
/// # Errors
///
/// [`InputError::EmptyUrl`] for blank input, [`InputError::Invalid`] when the
/// normalized URL is not an absolute URL with a host.
pub fn create_url_request(protocol: &str, raw: &str) -> Result<CreateUrlRequest, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::EmptyUrl);
    }
    let req = CreateUrlRequest { original_url: normalize_url(protocol, raw) };
    req.validate().map_err(|e| first_error(&e, &["original_url"]))?;
    Ok(req)
}

/// # Errors
///
/// [`InputError::Invalid`] when the username or password is blank.
pub fn login_request(username: &str, password: &str) -> Result<LoginRequest, InputError> {
    let req = LoginRequest { username: username.trim().to_owned(), password: password.to_owned() };
    req.validate().map_err(|e| first_error(&e, &["username", "password"]))?;
    Ok(req)
}

/// # Errors
///
/// [`InputError::Invalid`] for a username outside 3-50 characters, a password
/// shorter than 6 characters, or a malformed email.
pub fn register_request(username: &str, password: &str, email: &str) -> Result<RegisterRequest, InputError> {
    let req = RegisterRequest {
        username: username.trim().to_owned(),
        password: password.to_owned(),
        email: email.trim().to_owned(),
    };
    req.validate()
        .map_err(|e| first_error(&e, &["username", "password", "email"]))?;
    Ok(req)
}

fn first_error(errors: &ValidationErrors, order: &[&'static str]) -> InputError {
    let fields = errors.field_errors();
    for &field in order {
        let Some(list) = fields.get(field) else {
            continue;
        };
        if let Some(message) = list.iter().find_map(|e| e.message.as_ref()) {
            return InputError::Invalid { field, message: message.to_string() };
        }
    }
    InputError::Invalid { field: "form", message: "Invalid input".to_owned() }
}
