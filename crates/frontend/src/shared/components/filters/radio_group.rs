use leptos::prelude::*;

use super::popover::ColumnPopover;
use crate::shared::list_view::{DropdownAlignment, FilterOption, FilterValue};

/// Одно значение из списка
#[component]
pub fn RadioGroupFilter(
    /// Имя группы radio-кнопок, уникальное в пределах таблицы
    #[prop(into)]
    name: String,
    options: Vec<FilterOption>,
    #[prop(into)] initial_value: String,
    on_filter: Callback<FilterValue>,
    on_reset: Callback<()>,
    alignment: DropdownAlignment,
) -> impl IntoView {
    let active = !initial_value.is_empty();
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
            <div class="filter-options">
                {options
                    .iter()
                    .map(|option| {
                        let value = option.value.clone();
                        let value_on_change = option.value.clone();
                        view! {
                            <label class="form__radio-wrapper">
                                <input
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    prop:checked=move || draft.with(|d| *d == value)
                                    on:change=move |_| draft.set(value_on_change.clone())
                                />
                                <span class="form__radio-label">{option.label.clone()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </ColumnPopover>
    }
}
