use chrono::NaiveDate;
use leptos::prelude::*;

use super::popover::ColumnPopover;
use crate::shared::list_view::columns::{format_date_input, parse_date};
use crate::shared::list_view::{DropdownAlignment, FilterValue};

/// Период `from,to`; любая из границ может быть пустой
#[component]
pub fn DateRangeFilter(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    on_filter: Callback<FilterValue>,
    on_reset: Callback<()>,
    alignment: DropdownAlignment,
) -> impl IntoView {
    let active = from.is_some() || to.is_some();
    let draft_from = RwSignal::new(format_date_input(from));
    let draft_to = RwSignal::new(format_date_input(to));

    let apply = Callback::new(move |_| {
        on_filter.run(FilterValue::DateRange {
            from: parse_date(&draft_from.get_untracked()),
            to: parse_date(&draft_to.get_untracked()),
        })
    });

    view! {
        <ColumnPopover
            icon_name="filter"
            title="Date range"
            active=active
            alignment=alignment
            on_apply=apply
            on_reset=on_reset
        >
            <div class="date-range-filter">
                <label class="form__label">"From"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || draft_from.get()
                    on:input=move |ev| draft_from.set(event_target_value(&ev))
                />
                <label class="form__label">"To"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || draft_to.get()
                    on:input=move |ev| draft_to.set(event_target_value(&ev))
                />
            </div>
        </ColumnPopover>
    }
}
