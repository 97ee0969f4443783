use contracts::domain::a001_post::dto::{Post, SavePostDto};

use crate::shared::api_utils::ApiError;
use crate::shared::resource_api::ResourceApi;

pub const API: ResourceApi = ResourceApi::new("posts");

/// Пост целиком, вместе с `content`
pub async fn fetch_post(id: &str) -> Result<Post, ApiError> {
    API.fetch_one(id).await
}

pub async fn create_post(dto: &SavePostDto) -> Result<Post, ApiError> {
    API.create(dto).await
}

pub async fn update_post(id: &str, dto: &SavePostDto) -> Result<Post, ApiError> {
    API.update(id, dto).await
}
