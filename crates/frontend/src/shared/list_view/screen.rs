//! Состояние списочного экрана: query-контроллер, данные, общий флаг занятости

use std::future::Future;

use contracts::system::auth::claims::ResourceClaims;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::fetch::{use_list_resource, ListResource};
use super::query::{use_list_query, ListQuery};
use crate::shared::api_utils::ApiError;
use crate::shared::notify::{use_notify, Notify};
use crate::shared::resource_api::ResourceApi;
use crate::system::auth::context::{end_session, use_auth, AuthState};

pub struct ListScreen<T: Send + Sync + 'static> {
    pub api: ResourceApi,
    pub claims: ResourceClaims,
    pub trash: bool,
    pub query: ListQuery,
    pub resource: ListResource<T>,
    /// Один флаг на экран: пока идёт действие, кнопки действий заблокированы
    pub busy: RwSignal<bool>,
    pub notify: Notify,
    set_auth_state: WriteSignal<AuthState>,
}

impl<T: Send + Sync + 'static> Clone for ListScreen<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListScreen<T> {}

pub fn use_list_screen<T>(api: ResourceApi, claims: ResourceClaims, trash: bool) -> ListScreen<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let query = use_list_query();
    let resource = use_list_resource::<T>(api, trash, query);
    let (_, set_auth_state) = use_auth();

    ListScreen {
        api,
        claims,
        trash,
        query,
        resource,
        busy: RwSignal::new(false),
        notify: use_notify(),
        set_auth_state,
    }
}

impl<T> ListScreen<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Путь экрана: `/posts` для `/posts` и `/posts/trash`
    pub fn base_route(&self) -> String {
        format!("/{}", self.api.name())
    }

    pub fn trash_route(&self) -> String {
        format!("/{}/trash", self.api.name())
    }

    /// Выполняет действие, затем перезагружает список, затем снимает флаги.
    ///
    /// При ошибке: запись в лог и общий toast, повтора нет.
    /// `on_done` вызывается в обоих случаях (закрыть модалку и т.п.).
    pub fn run_mutation<F, Fut>(&self, action: F, on_done: impl FnOnce() + 'static)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let screen = *self;
        screen.busy.set(true);
        spawn_local(async move {
            let result = match action().await {
                Ok(()) => screen.resource.reload().await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                log::error!("{} action failed: {}", screen.api.name(), e);
                if e.is_auth_error() {
                    end_session(screen.set_auth_state);
                }
                screen.notify.generic_error();
            }
            screen.busy.try_set(false);
            on_done();
        });
    }
}
