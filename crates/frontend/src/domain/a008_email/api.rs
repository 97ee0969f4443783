use crate::shared::resource_api::ResourceApi;

pub const API: ResourceApi = ResourceApi::new("emails");
