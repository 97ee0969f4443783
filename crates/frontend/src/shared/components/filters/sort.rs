use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::list_view::{SortDescriptor, SortOrder};

/// Переключатель сортировки: нет -> ASC -> DESC -> нет
#[component]
pub fn SortToggle(sort: SortDescriptor) -> impl IntoView {
    let SortDescriptor {
        initial_value,
        on_sort_change,
    } = sort;

    let (icon_name, class, title) = match initial_value {
        None => ("sort", "column-sort", "Sort"),
        Some(SortOrder::Asc) => ("sort-asc", "column-sort column-sort--active", "Ascending"),
        Some(SortOrder::Desc) => ("sort-desc", "column-sort column-sort--active", "Descending"),
    };

    view! {
        <button
            type="button"
            class=class
            title=title
            on:click=move |_| on_sort_change.run(SortOrder::cycle(initial_value))
        >
            {icon(icon_name)}
        </button>
    }
}
