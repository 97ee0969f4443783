use leptos::prelude::*;

use super::popover::ColumnPopover;
use crate::shared::list_view::{DropdownAlignment, FilterValue};

/// Флаг `filterBy.<field>=true`; снятый флаг удаляет параметр
#[component]
pub fn ToggleFilter(
    initial_value: bool,
    #[prop(into)] label: String,
    on_filter: Callback<FilterValue>,
    on_reset: Callback<()>,
    alignment: DropdownAlignment,
) -> impl IntoView {
    let draft = RwSignal::new(initial_value);

    view! {
        <ColumnPopover
            icon_name="filter"
            title="Filter"
            active=initial_value
            alignment=alignment
            on_apply=Callback::new(move |_| on_filter.run(FilterValue::Flag(draft.get_untracked())))
            on_reset=on_reset
        >
            <label class="form__checkbox-wrapper">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || draft.get()
                    on:change=move |ev| draft.set(event_target_checked(&ev))
                />
                <span class="form__checkbox-label">{label.clone()}</span>
            </label>
        </ColumnPopover>
    }
}
