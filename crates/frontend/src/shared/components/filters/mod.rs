//! Виджеты заголовка колонки: поиск, сортировка и фильтры пяти видов

pub mod checkbox_group;
pub mod date_range;
pub mod popover;
pub mod radio_group;
pub mod search;
pub mod sort;
pub mod text;
pub mod toggle;

use leptos::prelude::*;

pub use checkbox_group::CheckboxGroupFilter;
pub use date_range::DateRangeFilter;
pub use popover::ColumnPopover;
pub use radio_group::RadioGroupFilter;
pub use search::SearchWidget;
pub use sort::SortToggle;
pub use text::TextFilter;
pub use toggle::ToggleFilter;

use crate::shared::list_view::{DropdownAlignment, FilterDescriptor, FilterKind};

/// Выбирает виджет по виду фильтра колонки
#[component]
pub fn ColumnFilter(
    filter: FilterDescriptor,
    column_key: &'static str,
    alignment: DropdownAlignment,
) -> impl IntoView {
    let FilterDescriptor {
        kind,
        initial_value,
        on_filter,
        on_reset,
    } = filter;

    match kind {
        FilterKind::Text { placeholder } => view! {
            <TextFilter
                initial_value=initial_value.text()
                placeholder=placeholder
                on_filter=on_filter
                on_reset=on_reset
                alignment=alignment
            />
        }
        .into_any(),
        FilterKind::Toggle { label } => view! {
            <ToggleFilter
                initial_value=initial_value.flag()
                label=label
                on_filter=on_filter
                on_reset=on_reset
                alignment=alignment
            />
        }
        .into_any(),
        FilterKind::DateRange => {
            let (from, to) = initial_value.date_range();
            view! {
                <DateRangeFilter
                    from=from
                    to=to
                    on_filter=on_filter
                    on_reset=on_reset
                    alignment=alignment
                />
            }
            .into_any()
        }
        FilterKind::CheckboxGroup { options } => view! {
            <CheckboxGroupFilter
                options=options
                initial_value=initial_value.many()
                on_filter=on_filter
                on_reset=on_reset
                alignment=alignment
            />
        }
        .into_any(),
        FilterKind::RadioGroup { options } => view! {
            <RadioGroupFilter
                name=format!("filter-{}", column_key)
                options=options
                initial_value=initial_value.text()
                on_filter=on_filter
                on_reset=on_reset
                alignment=alignment
            />
        }
        .into_any(),
    }
}
