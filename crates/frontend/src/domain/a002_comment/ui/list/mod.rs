use contracts::domain::a002_comment::dto::Comment;
use contracts::system::auth::claims::COMMENTS;
use leptos::prelude::*;

use crate::domain::a002_comment::api::API;
use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{use_list_screen, CellValue, ColumnDef, FilterKind, ListQuery, Row};

/// Длина превью текста комментария в таблице, символов
const PREVIEW_CHARS: usize = 80;

fn preview(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= PREVIEW_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

pub fn comment_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("content", "Comment").with_search(query.search("content")),
        ColumnDef::new("authorName", "Author").with_search(query.search("authorName")),
        ColumnDef::new("post", "Post"),
        ColumnDef::new("approved", "Approved").with_filter(query.filter(
            "approved",
            FilterKind::Toggle {
                label: "Approved only".to_string(),
            },
        )),
        ColumnDef::new("likesNum", "Likes").with_sort(query.sort("likesNum")),
        ColumnDef::new("createdAt", "Created")
            .with_sort(query.sort("createdAt"))
            .with_filter(query.filter("createdAt", FilterKind::DateRange)),
    ]
}

pub fn comment_row(comment: Comment) -> Row {
    let approved = comment.approved;
    Row::new(comment.id.clone())
        .cell("content", preview(&comment.content))
        .cell("authorName", comment.author_name.clone())
        .cell("post", comment.post.map(|p| p.title).unwrap_or_default())
        .cell(
            "approved",
            CellValue::view(move || {
                view! {
                    <span class="status-badge" class:status-badge--published=approved>
                        {if approved { "Yes" } else { "No" }}
                    </span>
                }
            }),
        )
        .cell("likesNum", comment.likes_num)
        .cell("createdAt", format_datetime(&comment.created_at))
}

#[component]
pub fn CommentsList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<Comment>(API, COMMENTS, trash);

    view! {
        <ResourceList
            screen=screen
            title="Comments"
            columns=Callback::new(comment_columns)
            to_row=Callback::new(comment_row)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_text() {
        assert_eq!(preview("  short  "), "short");
        let long = "слово ".repeat(40);
        let cut = preview(&long);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= PREVIEW_CHARS + 1);
    }

    #[test]
    fn test_comment_row() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": "c1", "content": "Nice", "authorName": "Bob", "approved": true,
                "post": {"id": "p1", "title": "Hello", "slug": "hello"},
                "createdAt": "2024-03-15T14:02:26Z"
            }"#,
        )
        .unwrap();
        let row = comment_row(comment);
        assert_eq!(row.get("post").and_then(CellValue::as_text).as_deref(), Some("Hello"));
        assert_eq!(row.get("likesNum").and_then(CellValue::as_text).as_deref(), Some("0"));
    }
}
