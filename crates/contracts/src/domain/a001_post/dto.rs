use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Статус публикации поста
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [PostStatus::Draft, PostStatus::Published, PostStatus::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
            PostStatus::Archived => "Archived",
        }
    }
}

impl FromStr for PostStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "archived" => Ok(PostStatus::Archived),
            other => Err(anyhow::anyhow!("unknown post status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: String,
    pub username: String,
}

/// Ссылка на таксономию (категорию или тег) внутри поста
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyRef {
    pub id: String,
    pub name: String,
}

/// Краткая ссылка на пост (для комментариев)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRef {
    pub id: String,
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Заполняется только в ответе detail-endpoint
    #[serde(default)]
    pub content: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub categories: Vec<TaxonomyRef>,
    #[serde(default)]
    pub tags: Vec<TaxonomyRef>,
    #[serde(default)]
    pub likes_num: u32,
    #[serde(default)]
    pub comments_num: u32,
    #[serde(default)]
    pub views_num: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Тело запроса создания/обновления поста
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePostDto {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub status: PostStatus,
    pub category_ids: Vec<String>,
    pub tag_ids: Vec<String>,
}

impl SavePostDto {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone().unwrap_or_default(),
            status: post.status,
            category_ids: post.categories.iter().map(|c| c.id.clone()).collect(),
            tag_ids: post.tags.iter().map(|t| t.id.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_wire_format() {
        let json = r#"{
            "id": "p1",
            "title": "Hello",
            "slug": "hello",
            "status": "published",
            "likesNum": 7,
            "categories": [{"id": "c1", "name": "News"}],
            "createdAt": "2024-03-15T14:02:26.123Z",
            "updatedAt": "2024-03-16T08:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.likes_num, 7);
        assert_eq!(post.comments_num, 0);
        assert!(post.deleted_at.is_none());
        assert_eq!(post.categories[0].name, "News");
    }

    #[test]
    fn test_status_parse() {
        for status in PostStatus::ALL {
            assert_eq!(status.as_str().parse::<PostStatus>().unwrap(), status);
        }
        assert!("deleted".parse::<PostStatus>().is_err());
    }

    #[test]
    fn test_save_dto_from_post() {
        let json = r#"{
            "id": "p1", "title": "T", "slug": "t", "status": "draft", "content": "body",
            "tags": [{"id": "t1", "name": "rust"}],
            "createdAt": "2024-03-15T14:02:26Z", "updatedAt": "2024-03-15T14:02:26Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        let dto = SavePostDto::from_post(&post);
        assert_eq!(dto.content, "body");
        assert_eq!(dto.tag_ids, vec!["t1".to_string()]);
        let wire = serde_json::to_value(&dto).unwrap();
        assert!(wire.get("categoryIds").is_some());
    }
}
