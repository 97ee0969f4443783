use leptos::prelude::*;

use super::popover::ColumnPopover;
use crate::shared::list_view::{DropdownAlignment, FilterValue};

/// Текстовый фильтр. Значение уходит на backend без проверки
/// (например, порог для `filterBy.likesNumGte`).
#[component]
pub fn TextFilter(
    #[prop(into)] initial_value: String,
    #[prop(optional, into)] placeholder: String,
    on_filter: Callback<FilterValue>,
    on_reset: Callback<()>,
    alignment: DropdownAlignment,
) -> impl IntoView {
    let active = !initial_value.trim().is_empty();
    let draft = RwSignal::new(initial_value);

    view! {
        <ColumnPopover
            icon_name="filter"
            title="Filter"
            active=active
            alignment=alignment
            on_apply=Callback::new(move |_| on_filter.run(FilterValue::Text(draft.get_untracked())))
            on_reset=on_reset
        >
            <input
                type="text"
                class="form__input"
                placeholder=placeholder.clone()
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
        </ColumnPopover>
    }
}
