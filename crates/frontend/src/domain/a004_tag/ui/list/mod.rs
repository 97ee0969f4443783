use contracts::domain::a004_tag::dto::Tag;
use contracts::system::auth::claims::TAGS;
use leptos::prelude::*;

use crate::domain::a004_tag::api::API;
use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{use_list_screen, ColumnDef, ListQuery, Row};

pub fn tag_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Name")
            .with_search(query.search("name"))
            .with_sort(query.sort("name")),
        ColumnDef::new("slug", "Slug").with_search(query.search("slug")),
        ColumnDef::new("postsNum", "Posts")
            .with_sort(query.sort("postsNum"))
            .with_filter(query.filter_gte("postsNum", "At least")),
        ColumnDef::new("createdAt", "Created").with_sort(query.sort("createdAt")),
    ]
}

pub fn tag_row(tag: Tag) -> Row {
    Row::new(tag.id)
        .cell("name", tag.name)
        .cell("slug", tag.slug)
        .cell("postsNum", tag.posts_num)
        .cell("createdAt", format_datetime(&tag.created_at))
}

#[component]
pub fn TagsList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<Tag>(API, TAGS, trash);

    view! {
        <ResourceList
            screen=screen
            title="Tags"
            columns=Callback::new(tag_columns)
            to_row=Callback::new(tag_row)
        />
    }
}
