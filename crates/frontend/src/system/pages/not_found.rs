use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not-found--system" category=PAGE_CAT_SYSTEM class="status-page">
            <h1 class="status-page__code">"404"</h1>
            <p class="status-page__message">"Page not found"</p>
            <A href="/" attr:class="button">"Go home"</A>
        </PageFrame>
    }
}
