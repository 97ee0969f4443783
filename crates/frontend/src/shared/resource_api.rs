//! Общий REST-клиент ресурса админки.
//!
//! Каждый ресурс (posts, comments, tags, ...) обслуживается одинаковым набором
//! endpoint'ов под `/api/{name}`.

use contracts::shared::{IdsRequest, Paginated};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::{get_json, send_empty, send_json, ApiError, Method};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceApi {
    name: &'static str,
}

impl ResourceApi {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `/api/{name}` или `/api/{name}/trash`
    pub fn list_endpoint(&self, trash: bool) -> String {
        if trash {
            format!("/api/{}/trash", self.name)
        } else {
            format!("/api/{}", self.name)
        }
    }

    /// Путь списка вместе с query string; он же ключ загрузки
    pub fn list_path(&self, trash: bool, query: &str) -> String {
        let endpoint = self.list_endpoint(trash);
        if query.is_empty() {
            endpoint
        } else {
            format!("{}?{}", endpoint, query)
        }
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("/api/{}/{}", self.name, urlencoding::encode(id))
    }

    fn action_path(&self, action: &str) -> String {
        format!("/api/{}/{}", self.name, action)
    }

    pub async fn fetch_one<T: DeserializeOwned>(&self, id: &str) -> Result<T, ApiError> {
        get_json(&self.item_path(id)).await
    }

    pub async fn create<B: Serialize, T: DeserializeOwned>(&self, body: &B) -> Result<T, ApiError> {
        send_json(Method::Post, &self.list_endpoint(false), body).await
    }

    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        send_json(Method::Put, &self.item_path(id), body).await
    }

    /// Перемещение в корзину
    pub async fn soft_delete(&self, ids: Vec<String>) -> Result<(), ApiError> {
        send_empty(Method::Post, &self.action_path("soft-delete"), Some(&IdsRequest { ids })).await
    }

    pub async fn recover(&self, ids: Vec<String>) -> Result<(), ApiError> {
        send_empty(Method::Post, &self.action_path("recover"), Some(&IdsRequest { ids })).await
    }

    pub async fn delete_permanently(&self, ids: Vec<String>) -> Result<(), ApiError> {
        send_empty(
            Method::Post,
            &self.action_path("delete-permanently"),
            Some(&IdsRequest { ids }),
        )
        .await
    }

    pub async fn empty_trash(&self) -> Result<(), ApiError> {
        send_empty::<()>(Method::Delete, &self.list_endpoint(true), None).await
    }
}

/// Загрузка страницы списка по готовому пути (`/api/posts?page=2...`)
pub async fn fetch_page<T: DeserializeOwned>(path: &str) -> Result<Paginated<T>, ApiError> {
    log::debug!("fetch list {}", path);
    get_json(path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS: ResourceApi = ResourceApi::new("posts");

    #[test]
    fn test_list_paths() {
        assert_eq!(POSTS.list_endpoint(false), "/api/posts");
        assert_eq!(POSTS.list_endpoint(true), "/api/posts/trash");
        assert_eq!(POSTS.list_path(false, ""), "/api/posts");
        assert_eq!(
            POSTS.list_path(true, "orderBy.createdAt=DESC&page=2"),
            "/api/posts/trash?orderBy.createdAt=DESC&page=2"
        );
    }

    #[test]
    fn test_item_and_action_paths() {
        assert_eq!(POSTS.item_path("42"), "/api/posts/42");
        assert_eq!(POSTS.item_path("a/b"), "/api/posts/a%2Fb");
        assert_eq!(POSTS.action_path("soft-delete"), "/api/posts/soft-delete");
    }
}
