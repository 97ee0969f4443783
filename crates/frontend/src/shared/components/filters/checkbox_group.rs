use leptos::prelude::*;

use super::popover::ColumnPopover;
use crate::shared::list_view::{DropdownAlignment, FilterOption, FilterValue};

/// Несколько значений через запятую: `filterBy.status=draft,published`
#[component]
pub fn CheckboxGroupFilter(
    options: Vec<FilterOption>,
    initial_value: Vec<String>,
    on_filter: Callback<FilterValue>,
    on_reset: Callback<()>,
    alignment: DropdownAlignment,
) -> impl IntoView {
    let active = !initial_value.is_empty();
    let draft = RwSignal::new(initial_value);

    let toggle = move |value: String, checked: bool| {
        draft.update(|values| {
            values.retain(|v| v != &value);
            if checked {
                values.push(value);
            }
        });
    };

    view! {
        <ColumnPopover
            icon_name="filter"
            title="Filter"
            active=active
            alignment=alignment
            on_apply=Callback::new(move |_| on_filter.run(FilterValue::Many(draft.get_untracked())))
            on_reset=on_reset
        >
            <div class="filter-options">
                {options
                    .iter()
                    .map(|option| {
                        let value = option.value.clone();
                        let value_on_change = option.value.clone();
                        view! {
                            <label class="form__checkbox-wrapper">
                                <input
                                    type="checkbox"
                                    class="form__checkbox"
                                    prop:checked=move || draft.with(|d| d.contains(&value))
                                    on:change=move |ev| {
                                        toggle(value_on_change.clone(), event_target_checked(&ev))
                                    }
                                />
                                <span class="form__checkbox-label">{option.label.clone()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </ColumnPopover>
    }
}
