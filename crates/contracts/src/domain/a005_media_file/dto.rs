use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Image,
        MediaKind::Video,
        MediaKind::Audio,
        MediaKind::Document,
    ];

    /// Значение фильтра `filterBy.type`
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
            MediaKind::Document => "Document",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub original_name: Option<String>,
    pub mime_type: String,
    /// Размер в байтах
    pub size: u64,
    pub url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl MediaFile {
    pub fn kind(&self) -> MediaKind {
        match self.mime_type.split('/').next().unwrap_or("") {
            "image" => MediaKind::Image,
            "video" => MediaKind::Video,
            "audio" => MediaKind::Audio,
            _ => MediaKind::Document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime: &str) -> MediaFile {
        MediaFile {
            id: "f".into(),
            filename: "f".into(),
            original_name: None,
            mime_type: mime.into(),
            size: 0,
            url: "/f".into(),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_kind_from_mime() {
        assert_eq!(file("image/png").kind(), MediaKind::Image);
        assert_eq!(file("video/mp4").kind(), MediaKind::Video);
        assert_eq!(file("audio/ogg").kind(), MediaKind::Audio);
        assert_eq!(file("application/pdf").kind(), MediaKind::Document);
        assert_eq!(file("").kind(), MediaKind::Document);
    }
}
