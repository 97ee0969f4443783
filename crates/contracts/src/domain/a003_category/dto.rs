use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Категория; backend отдаёт дерево, дочерние категории лежат в `children`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub posts_num: u32,
    #[serde(default)]
    pub children: Vec<Category>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_categories() {
        let json = r#"{
            "id": "1", "name": "Tech", "slug": "tech", "createdAt": "2024-01-01T00:00:00Z",
            "children": [
                {"id": "2", "name": "Rust", "slug": "rust", "createdAt": "2024-01-01T00:00:00Z",
                 "children": [{"id": "3", "name": "Async", "slug": "async", "createdAt": "2024-01-01T00:00:00Z"}]},
                {"id": "4", "name": "Go", "slug": "go", "createdAt": "2024-01-01T00:00:00Z"}
            ]
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.children.len(), 2);
        assert_eq!(category.children[0].children[0].name, "Async");
    }
}
