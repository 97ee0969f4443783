use serde::{Deserialize, Serialize};

/// Тело ошибки, которое backend отдаёт вместе с не-2xx статусом
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    /// Прикладной код ошибки (например, `DUPLICATE_SLUG`)
    #[serde(default)]
    pub code: Option<String>,
}

/// Сообщение ошибки: backend отдаёт строку, а для ошибок валидации массив строк
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn text(&self) -> String {
        match self {
            ErrorMessage::One(message) => message.clone(),
            ErrorMessage::Many(messages) => messages.join("; "),
        }
    }
}

impl ApiErrorBody {
    pub fn message_text(&self) -> Option<String> {
        self.message
            .as_ref()
            .map(ErrorMessage::text)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Прикладные коды ошибок, на которые UI реагирует отдельно от общего toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateSlug,
    DuplicateEmail,
    DuplicateUsername,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DuplicateSlug => "DUPLICATE_SLUG",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::DuplicateUsername => "DUPLICATE_USERNAME",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DUPLICATE_SLUG" => Some(ErrorCode::DuplicateSlug),
            "DUPLICATE_EMAIL" => Some(ErrorCode::DuplicateEmail),
            "DUPLICATE_USERNAME" => Some(ErrorCode::DuplicateUsername),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_roundtrip() {
        for code in [
            ErrorCode::DuplicateSlug,
            ErrorCode::DuplicateEmail,
            ErrorCode::DuplicateUsername,
        ] {
            assert_eq!(ErrorCode::from_code(code.as_str()), Some(code));
        }
        assert_eq!(ErrorCode::from_code("SOMETHING_ELSE"), None);
    }

    #[test]
    fn test_body_tolerates_missing_fields() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message": "boom"}"#).unwrap();
        assert_eq!(body.message_text().as_deref(), Some("boom"));
        assert!(body.code.is_none());

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"statusCode": 409, "code": "DUPLICATE_SLUG"}"#).unwrap();
        assert_eq!(body.status_code, Some(409));
        assert_eq!(body.code.as_deref(), Some("DUPLICATE_SLUG"));
    }

    #[test]
    fn test_validation_message_list() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"statusCode": 400, "message": ["title should not be empty", "slug must be a string"]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message_text().as_deref(),
            Some("title should not be empty; slug must be a string")
        );
    }
}
