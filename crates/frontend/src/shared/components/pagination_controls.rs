use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::icons::icon;
use crate::shared::list_view::{controls_visible, page_size_url, page_url, PageWindow, LIMIT_OPTIONS};

/// PaginationControls component - prev/next, jump to page, items per page
///
/// Все переходы идут через URL: `{base_url}?page=N[&limit=L][&query_string]`.
/// При `disabled` (пустая страница данных) контрол не рендерится совсем.
#[component]
pub fn PaginationControls(
    /// Total number of pages from backend meta (None = 1)
    #[prop(into)]
    total_pages: Signal<Option<u32>>,

    /// Current page from backend meta, unclamped
    #[prop(into)]
    current_page: Signal<Option<i64>>,

    /// Path without query string
    #[prop(into)]
    base_url: Signal<String>,

    /// Extra parameters (filters, sort) appended after page/limit
    #[prop(optional, into)]
    query_string: Signal<String>,

    /// Items per page from the URL
    #[prop(into)]
    limit: Signal<u32>,

    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());
    let window = Memo::new(move |_| PageWindow::new(current_page.get(), total_pages.get()));
    let jump = RwSignal::new(String::new());

    Effect::new(move |_| {
        jump.set(window.get().page.to_string());
    });

    let navigate_to = move |url: String| {
        log::debug!("pagination -> {}", url);
        navigate.with_value(|navigate| navigate(&url, NavigateOptions::default()));
    };

    let go = move |page: u32, limit: u32| {
        navigate_to(page_url(
            &base_url.get_untracked(),
            page,
            limit,
            &query_string.get_untracked(),
        ));
    };

    let on_jump = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // нечисловой ввод игнорируем
        if let Some(page) = window.get_untracked().jump_target(&jump.get_untracked()) {
            go(page, limit.get_untracked());
        }
    };

    view! {
        <Show when=move || controls_visible(disabled.get())>
            <div class="pagination-controls">
                {move || {
                    window
                        .get()
                        .prev()
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination-btn"
                                    title="Previous page"
                                    on:click=move |_| go(page, limit.get_untracked())
                                >
                                    {icon("chevron-left")}
                                </button>
                            }
                        })
                }}
                <form class="pagination-jump" on:submit=on_jump>
                    <span>"Page"</span>
                    <input
                        type="number"
                        class="pagination-input"
                        min="1"
                        max=move || window.get().total_pages.to_string()
                        prop:value=move || jump.get()
                        on:input=move |ev| jump.set(event_target_value(&ev))
                    />
                    <span>{move || format!("of {}", window.get().total_pages)}</span>
                </form>
                {move || {
                    window
                        .get()
                        .next()
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination-btn"
                                    title="Next page"
                                    on:click=move |_| go(page, limit.get_untracked())
                                >
                                    {icon("chevron-right")}
                                </button>
                            }
                        })
                }}
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let url = page_size_url(
                            &base_url.get_untracked(),
                            &event_target_value(&ev),
                            &query_string.get_untracked(),
                        );
                        if let Some(url) = url {
                            navigate_to(url);
                        }
                    }
                    prop:value=move || limit.get().to_string()
                >
                    {LIMIT_OPTIONS
                        .iter()
                        .map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || limit.get() == size>
                                    {format!("{} / page", size)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </Show>
    }
}
