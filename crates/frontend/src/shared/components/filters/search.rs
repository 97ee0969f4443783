use leptos::prelude::*;

use super::popover::ColumnPopover;
use crate::shared::list_view::{DropdownAlignment, SearchDescriptor};

/// Поиск по колонке (`searchBy.<field>`)
#[component]
pub fn SearchWidget(search: SearchDescriptor, alignment: DropdownAlignment) -> impl IntoView {
    let SearchDescriptor {
        initial_value,
        on_submit,
        on_reset,
    } = search;
    let active = !initial_value.trim().is_empty();
    let draft = RwSignal::new(initial_value);

    view! {
        <ColumnPopover
            icon_name="search"
            title="Search"
            active=active
            alignment=alignment
            on_apply=Callback::new(move |_| on_submit.run(draft.get_untracked()))
            on_reset=on_reset
        >
            <input
                type="search"
                class="form__input"
                placeholder="Search..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
        </ColumnPopover>
    }
}
