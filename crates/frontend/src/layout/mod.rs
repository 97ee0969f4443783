pub mod left;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use thaw::*;
use top_header::TopHeader;

use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |    Content (route outlet)    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside class="app-sidebar">
                    <left::Sidebar />
                </aside>

                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

/// Родитель защищённых маршрутов: без сессии показывает форму входа
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.restoring)
            fallback=|| view! { <div class="app-loading"><Spinner label="Loading..." /></div> }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <Shell />
            </Show>
        </Show>
    }
}
