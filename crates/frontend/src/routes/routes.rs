//! Маршруты админки.
//!
//! Каждый ресурс доступен как `/{resource}` и `/{resource}/trash`; оба пути
//! живут под `ProtectedLayout`, который без сессии показывает форму входа.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_post::ui::list::PostsList;
use crate::domain::a002_comment::ui::list::CommentsList;
use crate::domain::a003_category::ui::list::CategoriesList;
use crate::domain::a004_tag::ui::list::TagsList;
use crate::domain::a005_media_file::ui::list::MediaFilesList;
use crate::domain::a006_subscriber::ui::list::SubscribersList;
use crate::domain::a007_campaign::ui::list::CampaignsList;
use crate::domain::a008_email::ui::list::EmailsList;
use crate::layout::ProtectedLayout;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::server_error::ServerErrorPage;
use crate::system::users::ui::list::UsersList;

/// Начальная страница после входа
pub const HOME_ROUTE: &str = "/posts";

/// `/login`: уже вошедшего пользователя отправляет на главную
#[component]
fn LoginRoute() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <Redirect path=HOME_ROUTE />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginRoute />
                <Route path=path!("/500") view=ServerErrorPage />
                <ParentRoute path=path!("") view=ProtectedLayout>
                    <Route path=path!("") view=|| view! { <Redirect path=HOME_ROUTE /> } />

                    <Route path=path!("/posts") view=|| view! { <PostsList trash=false /> } />
                    <Route path=path!("/posts/trash") view=|| view! { <PostsList trash=true /> } />

                    <Route path=path!("/comments") view=|| view! { <CommentsList trash=false /> } />
                    <Route path=path!("/comments/trash") view=|| view! { <CommentsList trash=true /> } />

                    <Route path=path!("/categories") view=|| view! { <CategoriesList trash=false /> } />
                    <Route path=path!("/categories/trash") view=|| view! { <CategoriesList trash=true /> } />

                    <Route path=path!("/tags") view=|| view! { <TagsList trash=false /> } />
                    <Route path=path!("/tags/trash") view=|| view! { <TagsList trash=true /> } />

                    <Route path=path!("/files") view=|| view! { <MediaFilesList trash=false /> } />
                    <Route path=path!("/files/trash") view=|| view! { <MediaFilesList trash=true /> } />

                    <Route path=path!("/subscribers") view=|| view! { <SubscribersList trash=false /> } />
                    <Route path=path!("/subscribers/trash") view=|| view! { <SubscribersList trash=true /> } />

                    <Route path=path!("/campaigns") view=|| view! { <CampaignsList trash=false /> } />
                    <Route path=path!("/campaigns/trash") view=|| view! { <CampaignsList trash=true /> } />

                    <Route path=path!("/emails") view=|| view! { <EmailsList trash=false /> } />
                    <Route path=path!("/emails/trash") view=|| view! { <EmailsList trash=true /> } />

                    <Route path=path!("/users") view=|| view! { <UsersList trash=false /> } />
                    <Route path=path!("/users/trash") view=|| view! { <UsersList trash=true /> } />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
