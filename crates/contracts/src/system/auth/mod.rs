pub mod claims;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Текущий пользователь вместе с набором выданных ему claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    #[serde(default)]
    pub claims: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_without_claims() {
        let info: UserInfo =
            serde_json::from_str(r#"{"id": "u1", "username": "admin", "email": null}"#).unwrap();
        assert!(info.claims.is_empty());
    }

    #[test]
    fn test_login_response_camel_case() {
        let json = r#"{
            "accessToken": "a",
            "refreshToken": "r",
            "user": {"id": "u1", "username": "admin", "email": "a@b.c", "claims": ["posts.read"]}
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "a");
        assert_eq!(resp.user.claims, vec!["posts.read".to_string()]);
    }
}
