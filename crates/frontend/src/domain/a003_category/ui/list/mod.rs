use contracts::domain::a003_category::dto::Category;
use contracts::system::auth::claims::CATEGORIES;
use leptos::prelude::*;

use crate::domain::a003_category::api::API;
use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{use_list_screen, ColumnDef, ListQuery, Row};

pub fn category_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Name")
            .with_search(query.search("name"))
            .with_sort(query.sort("name")),
        ColumnDef::new("slug", "Slug"),
        ColumnDef::new("postsNum", "Posts").with_sort(query.sort("postsNum")),
        ColumnDef::new("createdAt", "Created").with_sort(query.sort("createdAt")),
    ]
}

/// Категория вместе с подкатегориями; дерево разворачивает таблица
pub fn category_row(category: Category) -> Row {
    let children = category.children.into_iter().map(category_row).collect();
    Row::new(category.id)
        .cell("name", category.name)
        .cell("slug", category.slug)
        .cell("postsNum", category.posts_num)
        .cell("createdAt", format_datetime(&category.created_at))
        .with_children(children)
}

#[component]
pub fn CategoriesList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<Category>(API, CATEGORIES, trash);

    view! {
        <ResourceList
            screen=screen
            title="Categories"
            columns=Callback::new(category_columns)
            to_row=Callback::new(category_row)
            show_children=true
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::rows::flatten_rows;

    #[test]
    fn test_nested_categories_flatten_with_depth() {
        let category: Category = serde_json::from_str(
            r#"{
                "id": "1", "name": "Tech", "slug": "tech", "createdAt": "2024-01-01T00:00:00Z",
                "children": [
                    {"id": "2", "name": "Rust", "slug": "rust", "createdAt": "2024-01-01T00:00:00Z",
                     "children": [{"id": "3", "name": "Async", "slug": "async", "createdAt": "2024-01-01T00:00:00Z"}]}
                ]
            }"#,
        )
        .unwrap();
        let flat = flatten_rows(&[category_row(category)], true);
        let depths: Vec<(String, usize)> = flat.iter().map(|r| (r.id.clone(), r.depth)).collect();
        assert_eq!(
            depths,
            vec![("1".to_string(), 0), ("2".to_string(), 1), ("3".to_string(), 2)]
        );
    }
}
