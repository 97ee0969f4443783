use contracts::domain::a001_post::dto::{Post, PostStatus};
use contracts::system::auth::claims::POSTS;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_post::api::API;
use crate::domain::a001_post::ui::details::{PostDetails, PostFormTarget};
use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{
    use_list_screen, CellValue, ColumnDef, FilterKind, FilterOption, ListQuery, Row,
};
use crate::system::auth::claims::can_render;
use crate::system::auth::context::use_claims;

fn status_options() -> Vec<FilterOption> {
    PostStatus::ALL
        .iter()
        .map(|s| FilterOption::new(s.as_str(), s.label()))
        .collect()
}

pub fn post_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("title", "Title")
            .with_search(query.search("title"))
            .with_sort(query.sort("title")),
        ColumnDef::new("status", "Status").with_filter(query.filter(
            "status",
            FilterKind::CheckboxGroup {
                options: status_options(),
            },
        )),
        ColumnDef::new("author", "Author"),
        ColumnDef::new("categories", "Categories"),
        ColumnDef::new("likesNum", "Likes")
            .with_sort(query.sort("likesNum"))
            .with_filter(query.filter_gte("likesNum", "At least")),
        ColumnDef::new("commentsNum", "Comments").with_sort(query.sort("commentsNum")),
        ColumnDef::new("createdAt", "Created")
            .with_sort(query.sort("createdAt"))
            .with_filter(query.filter("createdAt", FilterKind::DateRange)),
    ]
}

/// Строка поста; при `on_edit` заголовок открывает форму редактирования
pub fn post_row(post: Post, on_edit: Option<Callback<String>>) -> Row {
    let title = match on_edit {
        Some(on_edit) => {
            let id = post.id.clone();
            let title = post.title.clone();
            CellValue::view(move || {
                let id = id.clone();
                view! {
                    <button type="button" class="link-button" on:click=move |_| on_edit.run(id.clone())>
                        {title.clone()}
                    </button>
                }
            })
        }
        None => CellValue::from(post.title.clone()),
    };
    let status = post.status;
    let categories = post
        .categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Row::new(post.id.clone())
        .cell("title", title)
        .cell(
            "status",
            CellValue::view(move || {
                view! {
                    <span class=format!("status-badge status-badge--{}", status.as_str())>
                        {status.label()}
                    </span>
                }
            }),
        )
        .cell(
            "author",
            post.author.map(|a| a.username).unwrap_or_default(),
        )
        .cell("categories", categories)
        .cell("likesNum", post.likes_num)
        .cell("commentsNum", post.comments_num)
        .cell("createdAt", format_datetime(&post.created_at))
}

#[component]
pub fn PostsList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<Post>(API, POSTS, trash);
    let editing = RwSignal::new(None::<PostFormTarget>);

    let granted = use_claims();
    let can_edit = Signal::derive(move || !trash && granted.with(|g| can_render(&[POSTS.write], g)));
    let on_edit = Callback::new(move |id: String| editing.set(Some(PostFormTarget::Existing(id))));

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        spawn_local(async move {
            if let Err(e) = screen.resource.reload().await {
                log::error!("Failed to reload posts: {}", e);
            }
        });
    });

    view! {
        <ResourceList
            screen=screen
            title="Posts"
            columns=Callback::new(post_columns)
            to_row=Callback::new(move |post: Post| post_row(post, can_edit.get().then_some(on_edit)))
            on_add=Callback::new(move |_| editing.set(Some(PostFormTarget::New)))
        />
        {move || {
            editing
                .get()
                .map(|target| {
                    view! {
                        <PostDetails
                            target=target
                            on_close=Callback::new(move |_| editing.set(None))
                            on_saved=on_saved
                        />
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        serde_json::from_str(
            r#"{
                "id": "p1", "title": "Hello", "slug": "hello", "status": "draft",
                "author": {"id": "u1", "username": "ann"},
                "categories": [{"id": "c1", "name": "News"}, {"id": "c2", "name": "Tech"}],
                "likesNum": 12,
                "createdAt": "2024-03-15T14:02:26Z", "updatedAt": "2024-03-15T14:02:26Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_post_row_cells() {
        let row = post_row(post(), None);
        assert_eq!(row.id, "p1");
        assert_eq!(row.get("title").and_then(CellValue::as_text).as_deref(), Some("Hello"));
        assert_eq!(row.get("author").and_then(CellValue::as_text).as_deref(), Some("ann"));
        assert_eq!(
            row.get("categories").and_then(CellValue::as_text).as_deref(),
            Some("News, Tech")
        );
        assert_eq!(row.get("likesNum").and_then(CellValue::as_text).as_deref(), Some("12"));
        assert!(row.children.is_empty());
    }

    #[test]
    fn test_status_options_cover_all_statuses() {
        let values: Vec<String> = status_options().into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["draft", "published", "archived"]);
    }
}
