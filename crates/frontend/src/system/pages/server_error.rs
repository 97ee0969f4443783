use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

/// `/500`: сюда уводит неудачная загрузка списка
#[component]
pub fn ServerErrorPage() -> impl IntoView {
    view! {
        <PageFrame page_id="error--system" category=PAGE_CAT_SYSTEM class="status-page">
            <h1 class="status-page__code">"500"</h1>
            <p class="status-page__message">
                "Something went wrong on our side. Please try again later."
            </p>
            <A href="/" attr:class="button button--primary">
                {icon("chevron-left")}
                <span>"Back to dashboard"</span>
            </A>
        </PageFrame>
    }
}
