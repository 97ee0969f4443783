//! Общий списочный экран ресурса: заголовок, таблица, пагинация, корзина.
//!
//! Обычный вид: групповое "Delete" переносит записи в корзину.
//! Корзина (`/{resource}/trash`): "Recover", "Delete permanently" и "Empty Trash".

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::*;

use super::confirm_dialog::ConfirmDialog;
use super::data_table::{BulkAction, DataTable, TableAction};
use super::pagination_controls::PaginationControls;
use crate::shared::number_format::format_count;
use crate::shared::list_view::{ColumnDef, ListQuery, ListScreen, Row, ViewState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Необратимое действие, ждущее подтверждения
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingAction {
    DeletePermanently(Vec<String>),
    EmptyTrash,
}

impl PendingAction {
    fn message(&self) -> String {
        match self {
            PendingAction::DeletePermanently(ids) => format!(
                "Delete {} selected record(s) permanently? This cannot be undone.",
                ids.len()
            ),
            PendingAction::EmptyTrash => {
                "Delete every record in the trash permanently? This cannot be undone.".to_string()
            }
        }
    }
}

/// "Empty Trash" показывается только в корзине и только если в ней что-то есть
fn shows_empty_trash(trash: bool, item_count: usize) -> bool {
    trash && item_count > 0
}

#[component]
pub fn ResourceList<T>(
    screen: ListScreen<T>,
    #[prop(into)] title: String,
    /// Колонки строятся заново при каждом изменении URL
    columns: Callback<ListQuery, Vec<ColumnDef>>,
    /// Запись -> строка таблицы
    to_row: Callback<T, Row>,
    #[prop(optional)] show_children: bool,
    /// Открыть форму создания; без него кнопки "Add" нет
    #[prop(optional)]
    on_add: Option<Callback<()>>,
) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let ListScreen {
        api,
        claims,
        trash,
        query,
        resource,
        busy,
        ..
    } = screen;

    let pending = RwSignal::new(None::<PendingAction>);
    let confirm_open = RwSignal::new(false);

    let columns = Signal::derive(move || columns.run(query));
    let rows = Signal::derive(move || {
        resource
            .items()
            .into_iter()
            .map(|item| to_row.run(item))
            .collect::<Vec<_>>()
    });
    let loading = Signal::derive(move || resource.is_loading());
    let total_items = move || resource.meta().map(|m| m.total_items).unwrap_or(0);

    let ask = move |action: PendingAction| {
        pending.set(Some(action));
        confirm_open.set(true);
    };

    let on_confirm = Callback::new(move |_| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        screen.run_mutation(
            move || async move {
                match action {
                    PendingAction::DeletePermanently(ids) => api.delete_permanently(ids).await,
                    PendingAction::EmptyTrash => api.empty_trash().await,
                }
            },
            move || {
                confirm_open.set(false);
                pending.set(None);
            },
        );
    });

    let mut actions = Vec::new();
    let mut bulk_actions = Vec::new();
    if trash {
        let base_route = screen.base_route();
        actions.push(TableAction::new(
            "Back to list",
            "chevron-left",
            Callback::new(move |_| query.navigate_to(&base_route)),
        ));
        actions.push(
            TableAction::new("Empty Trash", "trash", Callback::new(move |_| ask(PendingAction::EmptyTrash)))
                .claims(vec![claims.delete])
                .danger()
                .visible_when(Signal::derive(move || {
                    shows_empty_trash(trash, resource.item_count())
                })),
        );
        bulk_actions.push(
            BulkAction::new(
                "Recover",
                "recover",
                Callback::new(move |ids: Vec<String>| {
                    screen.run_mutation(move || async move { api.recover(ids).await }, || {})
                }),
            )
            .claims(vec![claims.write]),
        );
        bulk_actions.push(
            BulkAction::new(
                "Delete permanently",
                "trash",
                Callback::new(move |ids: Vec<String>| ask(PendingAction::DeletePermanently(ids))),
            )
            .claims(vec![claims.delete])
            .danger(),
        );
    } else {
        if let Some(on_add) = on_add {
            actions.push(
                TableAction::new("Add", "plus", on_add).claims(vec![claims.write]),
            );
        }
        let trash_route = screen.trash_route();
        actions.push(
            TableAction::new(
                "Trash",
                "trash",
                Callback::new(move |_| query.navigate_to(&trash_route)),
            )
            .claims(vec![claims.delete]),
        );
        bulk_actions.push(
            BulkAction::new(
                "Delete",
                "trash",
                Callback::new(move |ids: Vec<String>| {
                    screen.run_mutation(move || async move { api.soft_delete(ids).await }, || {})
                }),
            )
            .claims(vec![claims.delete])
            .danger(),
        );
    }

    let heading = if trash {
        format!("{} · Trash", title)
    } else {
        title
    };
    let page_id = if trash { "resource--trash" } else { "resource--list" };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{heading}</h1>
                    <Badge>{move || format_count(u64::from(total_items()))}</Badge>
                </div>
            </div>

            <div class="page__content">
                <DataTable
                    columns=columns
                    data=rows
                    loading=loading
                    show_children=show_children
                    actions=actions
                    bulk_actions=bulk_actions
                    busy=busy
                />

                <PaginationControls
                    total_pages=Signal::derive(move || resource.meta().map(|m| m.total_pages))
                    current_page=Signal::derive(move || resource.meta().map(|m| m.current_page as i64))
                    base_url=query.path
                    query_string=Signal::derive(move || {
                        query.view.with(|v| v.without_paging().to_query_string())
                    })
                    limit=Signal::derive(move || query.view.with(ViewState::limit))
                    disabled=Signal::derive(move || resource.item_count() == 0)
                />
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Are you sure?"
                message=Signal::derive(move || {
                    pending.with(|p| p.as_ref().map(PendingAction::message).unwrap_or_default())
                })
                confirm_label="Delete"
                busy=busy
                on_confirm=on_confirm
                on_cancel=Callback::new(move |_| pending.set(None))
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trash_hidden_without_items() {
        assert!(!shows_empty_trash(true, 0));
        assert!(shows_empty_trash(true, 3));
        assert!(!shows_empty_trash(false, 3));
    }

    #[test]
    fn test_pending_messages() {
        let msg = PendingAction::DeletePermanently(vec!["1".into(), "2".into()]).message();
        assert!(msg.starts_with("Delete 2 selected"));
        assert!(PendingAction::EmptyTrash.message().contains("trash"));
    }
}
