//! Загрузка страницы списка, привязанная к ключу `endpoint?query`

use contracts::shared::{Paginated, PaginationMeta};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use serde::de::DeserializeOwned;

use super::query::ListQuery;
use crate::shared::api_utils::ApiError;
use crate::shared::resource_api::{fetch_page, ResourceApi};
use crate::system::auth::context::{end_session, use_auth};

pub const SERVER_ERROR_PATH: &str = "/500";

/// Данные списка. Перезагружается при каждом изменении ключа;
/// ответ на устаревший ключ отбрасывается.
pub struct ListResource<T: Send + Sync + 'static> {
    data: RwSignal<Option<Paginated<T>>>,
    loading: RwSignal<bool>,
    key: Memo<String>,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

pub fn use_list_resource<T>(api: ResourceApi, trash: bool, query: ListQuery) -> ListResource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let key = Memo::new(move |_| query.view.with(|v| api.list_path(trash, &v.fetch_query())));
    let resource = ListResource {
        data: RwSignal::new(None),
        loading: RwSignal::new(true),
        key,
    };

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let key = key.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match resource.load(key).await {
                Ok(()) => {}
                Err(e) if e.is_auth_error() => {
                    log::warn!("List fetch rejected, ending session: {}", e);
                    end_session(set_auth_state);
                }
                Err(e) => {
                    log::error!("List fetch failed: {}", e);
                    navigate(SERVER_ERROR_PATH, NavigateOptions::default());
                }
            }
        });
    });

    resource
}

impl<T> ListResource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load(self, key: String) -> Result<(), ApiError> {
        self.loading.set(true);
        let result = fetch_page::<T>(&key).await;

        // экран мог быть закрыт или ключ сменился, пока шёл запрос
        match self.key.try_get_untracked() {
            Some(current) if current == key => {}
            _ => {
                log::warn!("Dropping stale list result for {}", key);
                return Ok(());
            }
        }

        self.loading.try_set(false);
        self.data.try_set(Some(result?));
        Ok(())
    }

    /// Повторная загрузка текущего ключа; завершается после обновления данных
    pub async fn reload(self) -> Result<(), ApiError> {
        let Some(key) = self.key.try_get_untracked() else {
            return Ok(());
        };
        self.load(key).await
    }
}

impl<T: Clone + Send + Sync + 'static> ListResource<T> {
    pub fn items(&self) -> Vec<T> {
        self.data
            .with(|d| d.as_ref().map(|p| p.items.clone()).unwrap_or_default())
    }

    pub fn meta(&self) -> Option<PaginationMeta> {
        self.data.with(|d| d.as_ref().map(|p| p.meta))
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn item_count(&self) -> usize {
        self.data
            .with(|d| d.as_ref().map(|p| p.items.len()).unwrap_or(0))
    }
}
