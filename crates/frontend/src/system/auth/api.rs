use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils::{get_json, send_empty, send_public, ApiError, Method};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    send_public(Method::Post, "/api/auth/login", &request).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    send_public(Method::Post, "/api/auth/refresh", &request).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    send_empty(Method::Post, "/api/auth/logout", Some(&request)).await
}

/// Current user with claims; uses the stored access token
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    get_json("/api/auth/me").await
}
