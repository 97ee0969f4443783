//! Чекбокс в заголовке таблицы для выбора всех строк

use leptos::prelude::*;
use thaw::*;

use crate::shared::list_view::SelectionState;

/// Показывает три состояния: unchecked, checked, indeterminate.
/// Состояние вычисляется снаружи из набора выбранных id.
#[component]
pub fn HeaderCheckbox(
    #[prop(into)] state: Signal<SelectionState>,
    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate нельзя задать атрибутом, только свойством DOM-элемента
    Effect::new(move |_| {
        let indeterminate = state.get() == SelectionState::Some;
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == SelectionState::All
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
