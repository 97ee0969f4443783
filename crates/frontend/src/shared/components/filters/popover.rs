use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::list_view::DropdownAlignment;

/// Кнопка в заголовке колонки и выпадающая панель с формой виджета.
///
/// Submit формы вызывает `on_apply`, кнопка "Reset" вызывает `on_reset`;
/// после любого из них панель закрывается.
#[component]
pub fn ColumnPopover(
    icon_name: &'static str,
    #[prop(into)] title: String,
    /// Подсветка кнопки, если в URL есть значение
    #[prop(into)]
    active: Signal<bool>,
    alignment: DropdownAlignment,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let trigger_class = move || {
        if active.get() {
            "column-popover__trigger column-popover__trigger--active"
        } else {
            "column-popover__trigger"
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_apply.run(());
        open.set(false);
    };

    view! {
        <span class="column-popover">
            <button
                type="button"
                class=trigger_class
                title=title
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon(icon_name)}
            </button>
            <Show when=move || open.get()>
                <div class="column-popover__backdrop" on:click=move |_| open.set(false)></div>
                <div class=format!("column-popover__panel {}", alignment.class())>
                    <form on:submit=on_submit>
                        {children()}
                        <div class="column-popover__actions">
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=move |_| {
                                    on_reset.run(());
                                    open.set(false);
                                }
                            >
                                "Reset"
                            </button>
                            <button type="submit" class="button button--primary">
                                "Apply"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </span>
    }
}
