//! Контроллер query string списка.
//!
//! Превращает события виджетов колонок в изменение одного параметра URL
//! и навигацию на тот же путь; начальные значения виджетов читает из URL.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::columns::{FilterDescriptor, FilterKind, FilterValue, SearchDescriptor, SortDescriptor};
use super::view_state::{ParamKey, SortOrder, ViewState};

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

#[derive(Clone, Copy)]
pub struct ListQuery {
    /// Состояние, разобранное из текущего `location.search`
    pub view: Memo<ViewState>,
    /// Текущий путь без query string
    pub path: Memo<String>,
    navigate: StoredValue<NavigateFn, LocalStorage>,
}

/// Требует `Router` выше по дереву
pub fn use_list_query() -> ListQuery {
    let location = use_location();
    let search = location.search;
    let view = Memo::new(move |_| ViewState::from_query(&search.get()));
    let navigate = use_navigate();
    let navigate: NavigateFn =
        Box::new(move |url: &str, options: NavigateOptions| navigate(url, options));

    ListQuery {
        view,
        path: location.pathname,
        navigate: StoredValue::new_local(navigate),
    }
}

impl ListQuery {
    pub fn url_for(&self, state: &ViewState) -> String {
        let path = self.path.get_untracked();
        let query = state.to_query_string();
        if query.is_empty() {
            path
        } else {
            format!("{}?{}", path, query)
        }
    }

    pub fn navigate_to(&self, url: &str) {
        log::debug!("navigate {}", url);
        self.navigate
            .with_value(|navigate| navigate(url, NavigateOptions::default()));
    }

    pub fn push(&self, state: &ViewState) {
        let url = self.url_for(state);
        self.navigate_to(&url);
    }

    /// Меняет ровно один параметр; пустое значение удаляет его
    pub fn apply(&self, key: ParamKey, value: Option<String>) {
        let next = self.view.get_untracked().with(&key, value);
        self.push(&next);
    }

    pub fn search(&self, field: &'static str) -> SearchDescriptor {
        let query = *self;
        let key = ParamKey::Search(field.to_string());
        SearchDescriptor {
            initial_value: self.view.with(|v| v.get(&key).unwrap_or_default().to_string()),
            on_submit: Callback::new({
                let key = key.clone();
                move |text: String| query.apply(key.clone(), Some(text))
            }),
            on_reset: Callback::new(move |_| query.apply(key.clone(), None)),
        }
    }

    pub fn sort(&self, field: &'static str) -> SortDescriptor {
        let query = *self;
        SortDescriptor {
            initial_value: self.view.with(|v| v.order(field)),
            on_sort_change: Callback::new(move |order: Option<SortOrder>| {
                query.apply(
                    ParamKey::Order(field.to_string()),
                    order.map(|o| o.as_str().to_string()),
                )
            }),
        }
    }

    /// Фильтр `filterBy.<field>`
    pub fn filter(&self, field: &'static str, kind: FilterKind) -> FilterDescriptor {
        self.filter_for(ParamKey::Filter(field.to_string()), kind)
    }

    /// Фильтр `filterBy.<field>Gte`; значение уходит на backend как есть
    pub fn filter_gte(&self, field: &'static str, placeholder: &str) -> FilterDescriptor {
        self.filter_for(
            ParamKey::FilterGte(field.to_string()),
            FilterKind::Text {
                placeholder: placeholder.to_string(),
            },
        )
    }

    fn filter_for(&self, key: ParamKey, kind: FilterKind) -> FilterDescriptor {
        let query = *self;
        let initial_value = self
            .view
            .with(|v| FilterValue::from_param(&kind, v.get(&key)));
        FilterDescriptor {
            kind,
            initial_value,
            on_filter: Callback::new({
                let key = key.clone();
                move |value: FilterValue| query.apply(key.clone(), value.to_param())
            }),
            on_reset: Callback::new(move |_| query.apply(key.clone(), None)),
        }
    }
}
