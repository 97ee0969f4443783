//! Таблица списочных экранов.
//!
//! Рисует заголовки с виджетами колонок, строки (в том числе вложенные),
//! кнопки над таблицей и групповые действия под ней. Сама ничего не загружает.

pub mod actions;
pub mod header_checkbox;

use leptos::prelude::*;
use thaw::*;

pub use actions::{BulkAction, TableAction};
use actions::button_class;
use header_checkbox::HeaderCheckbox;

use crate::shared::components::filters::{ColumnFilter, SearchWidget, SortToggle};
use crate::shared::icons::icon;
use crate::shared::list_view::rows::{flatten_rows, row_ids, shows_child_glyph, CHILD_GLYPH};
use crate::shared::list_view::{
    BodyState, CellValue, ColumnDef, DropdownAlignment, FlatRow, Row, Selection,
};
use crate::system::auth::guard::Can;

#[component]
pub fn DataTable(
    /// Колонки; пересоздаются при изменении URL, чтобы виджеты получили новые начальные значения
    #[prop(into)]
    columns: Signal<Vec<ColumnDef>>,
    #[prop(into)] data: Signal<Vec<Row>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(default = true)] selectable: bool,
    /// Рендерить дочерние строки сразу после родителя
    #[prop(optional)]
    show_children: bool,
    #[prop(optional)] actions: Vec<TableAction>,
    #[prop(optional)] bulk_actions: Vec<BulkAction>,
    /// Общий флаг занятости экрана: блокирует кнопки действий
    #[prop(optional, into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let selection = RwSignal::new(Selection::default());
    let flat_rows = Signal::derive(move || data.with(|rows| flatten_rows(rows, show_children)));
    let visible_ids = Memo::new(move |_| flat_rows.with(|rows| row_ids(rows)));
    let selection_state =
        Signal::derive(move || visible_ids.with(|ids| selection.with(|s| s.state(ids))));

    // новые данные: выбор сбрасывается или сужается до строк на экране
    Effect::new(move |_| {
        visible_ids.with(|ids| {
            selection.update(|s| {
                let dropped = s.sync_rows(ids);
                if dropped > 0 {
                    log::debug!("{} selected row(s) left the page, unselected", dropped);
                }
            });
        });
    });

    let toggle_all = Callback::new(move |checked: bool| {
        let ids = visible_ids.get_untracked();
        selection.update(|s| s.toggle_all(checked, &ids));
    });

    let column_count = move || columns.with(Vec::len) + usize::from(selectable);

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                {actions
                    .into_iter()
                    .map(|action| view! { <ToolbarButton action=action busy=busy /> })
                    .collect_view()}
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {selectable
                                .then(|| view! { <HeaderCheckbox state=selection_state on_change=toggle_all /> })}
                            {move || {
                                columns
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, column)| view! { <ColumnHeader column=column index=index /> })
                                    .collect_view()
                            }}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = flat_rows.get();
                            match BodyState::resolve(loading.get(), rows.len()) {
                                BodyState::Loading => view! {
                                    <TableRow class="data-table__state-row">
                                        <TableCell attr:colspan=column_count()>
                                            <Spinner size=SpinnerSize::Small label="Loading..." />
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any(),
                                BodyState::Empty => view! {
                                    <TableRow class="data-table__state-row">
                                        <TableCell attr:colspan=column_count()>
                                            <span class="data-table__empty">"No Records"</span>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any(),
                                BodyState::Rows => {
                                    let cols = columns.get();
                                    rows.into_iter()
                                        .map(|row| render_row(row, &cols, selectable, selection))
                                        .collect_view()
                                        .into_any()
                                }
                            }
                        }}
                    </TableBody>
                </Table>
            </div>

            <Show when=move || visible_ids.with(|ids| selection.with(|s| s.shows_bulk_actions(ids)))>
                <div class="data-table__bulk">
                    <span class="data-table__bulk-count">
                        {move || {
                            let count = visible_ids.with(|ids| selection.with(|s| s.visible_selected(ids).len()));
                            format!("Selected: {}", count)
                        }}
                    </span>
                    {bulk_actions
                        .iter()
                        .cloned()
                        .map(|action| {
                            view! {
                                <BulkButton action=action selection=selection visible_ids=visible_ids busy=busy />
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ColumnHeader(column: ColumnDef, index: usize) -> impl IntoView {
    let alignment = DropdownAlignment::for_column(index);
    let ColumnDef {
        key,
        title,
        search,
        sort,
        filter,
    } = column;

    view! {
        <TableHeaderCell resizable=false>
            <div class="data-table__header">
                <span class="data-table__title">{title}</span>
                {search.map(|search| view! { <SearchWidget search=search alignment=alignment /> })}
                {sort.map(|sort| view! { <SortToggle sort=sort /> })}
                {filter
                    .map(|filter| {
                        view! { <ColumnFilter filter=filter column_key=key alignment=alignment /> }
                    })}
            </div>
        </TableHeaderCell>
    }
}

fn render_row(
    row: FlatRow,
    columns: &[ColumnDef],
    selectable: bool,
    selection: RwSignal<Selection>,
) -> impl IntoView {
    let checkbox = selectable.then(|| {
        let id_value = row.id.clone();
        let id_checked = row.id.clone();
        let id_changed = row.id.clone();
        view! {
            <TableCell class="fixed-checkbox-column">
                <input
                    type="checkbox"
                    class="table__checkbox"
                    value=id_value
                    prop:checked=move || selection.with(|s| s.is_selected(&id_checked))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        selection.update(|s| s.toggle(&id_changed, checked));
                    }
                />
            </TableCell>
        }
    });

    let cells = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let content = row.cells.get(column.key).map(CellValue::render);
            if shows_child_glyph(row.depth, index, selectable) {
                let style = format!("padding-left: {}px", row.indent_px());
                view! {
                    <TableCell>
                        <span class="data-table__nested" style=style>
                            <span class="data-table__child-glyph">{CHILD_GLYPH}</span>
                            {content}
                        </span>
                    </TableCell>
                }
                .into_any()
            } else {
                view! { <TableCell>{content}</TableCell> }.into_any()
            }
        })
        .collect_view();

    let row_class = if row.depth > 0 {
        "data-table__row data-table__row--child"
    } else {
        "data-table__row"
    };

    view! {
        <TableRow class=row_class>
            {checkbox}
            {cells}
        </TableRow>
    }
}

#[component]
fn ToolbarButton(action: TableAction, busy: Signal<bool>) -> impl IntoView {
    let TableAction {
        label,
        icon: icon_name,
        claims,
        danger,
        visible,
        on_click,
    } = action;

    view! {
        <Can claims=claims>
            <Show when=move || visible.get()>
                <button
                    type="button"
                    class=button_class(danger)
                    disabled=move || busy.get()
                    on:click=move |_| on_click.run(())
                >
                    {icon(icon_name)}
                    <span>{label}</span>
                </button>
            </Show>
        </Can>
    }
}

#[component]
fn BulkButton(
    action: BulkAction,
    selection: RwSignal<Selection>,
    visible_ids: Memo<Vec<String>>,
    busy: Signal<bool>,
) -> impl IntoView {
    // в действие уходят только отмеченные строки текущей страницы
    let selected_ids =
        move || visible_ids.with_untracked(|ids| selection.with_untracked(|s| s.visible_selected(ids)));

    let BulkAction {
        label,
        icon: icon_name,
        claims,
        danger,
        on_click,
    } = action;

    view! {
        <Can claims=claims>
            <button
                type="button"
                class=button_class(danger)
                disabled=move || busy.get()
                on:click=move |_| on_click.run(selected_ids())
            >
                {icon(icon_name)}
                <span>{label}</span>
            </button>
        </Can>
    }
}
