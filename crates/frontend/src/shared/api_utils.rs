//! API utilities for frontend-backend communication
//!
//! Provides the base URL, the typed `ApiError`, and JSON helpers that attach
//! the bearer token from localStorage.

use contracts::shared::{ApiErrorBody, ErrorCode};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::auth::storage;

/// Базовый URL API, заданный при сборке (`ADMIN_API_BASE=https://api.example.com trunk build`)
const API_BASE_OVERRIDE: Option<&str> = option_env!("ADMIN_API_BASE");
const BACKEND_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Request failed ({status}): {message}")]
    Http {
        status: u16,
        message: String,
        code: Option<String>,
    },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Ошибка из статуса и тела не-2xx ответа
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(ApiErrorBody::message_text)
            .unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Http {
            status,
            message,
            code: parsed.and_then(|b| b.code),
        }
    }

    /// Прикладной код ошибки из тела ответа, если он известен UI
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ApiError::Http {
                code: Some(code), ..
            } => ErrorCode::from_code(code),
            _ => None,
        }
    }

    /// Ошибка означает, что сессия больше не действительна
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NotAuthenticated)
    }
}

/// Get the base URL for API requests
///
/// Uses the `ADMIN_API_BASE` build-time override when present, otherwise
/// the current window location with port 3000 for the backend server.
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(window) => {
            let location = window.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    resolve_api_base(API_BASE_OVERRIDE, &protocol, &hostname)
}

fn resolve_api_base(override_base: Option<&str>, protocol: &str, hostname: &str) -> String {
    match override_base.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => format!("{}//{}:{}", protocol, hostname, BACKEND_PORT),
    }
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

fn request(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

fn authorized(method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::NotAuthenticated)?;
    Ok(request(method, &api_url(path)).header("Authorization", &format!("Bearer {}", token)))
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    log::warn!("{} {} -> {}", status, response.url(), error);
    Err(error)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Отправка без токена (login, refresh)
pub async fn send_public<B, T>(method: Method, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = request(method, &api_url(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check_status(response).await?).await
}

async fn send_authorized<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let builder = authorized(method, path)?;
    let sent = match body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await
}

/// GET с токеном и разбором JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send_authorized::<()>(Method::Get, path, None).await?;
    decode(response).await
}

/// POST/PUT с телом и разбором JSON ответа
pub async fn send_json<B, T>(method: Method, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = send_authorized(method, path, Some(body)).await?;
    decode(response).await
}

/// Запрос, ответ которого не нужен (204 или произвольное тело)
pub async fn send_empty<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<(), ApiError> {
    send_authorized(method, path, body).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(
            resolve_api_base(None, "https:", "admin.example.com"),
            "https://admin.example.com:3000"
        );
    }

    #[test]
    fn test_base_override() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.com/"), "http:", "localhost"),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_api_base(Some("  "), "http:", "localhost"),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_duplicate_slug_code() {
        let err = ApiError::from_status(
            409,
            r#"{"statusCode": 409, "message": "Slug already exists", "code": "DUPLICATE_SLUG"}"#,
        );
        assert_eq!(err.error_code(), Some(ErrorCode::DuplicateSlug));
        assert_eq!(err.to_string(), "Request failed (409): Slug already exists");
    }

    #[test]
    fn test_unknown_code_and_plain_body() {
        let err = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(err.error_code(), None);
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "HTTP 500".into(),
                code: None,
            }
        );

        let err = ApiError::from_status(400, r#"{"code": "SOMETHING"}"#);
        assert_eq!(err.error_code(), None);
    }

    #[test]
    fn test_401_is_auth_error() {
        let err = ApiError::from_status(401, "");
        assert_eq!(err, ApiError::Unauthorized);
        assert!(err.is_auth_error());
        assert!(!ApiError::Network("offline".into()).is_auth_error());
    }
}
