use contracts::domain::a005_media_file::dto::{MediaFile, MediaKind};
use contracts::system::auth::claims::FILES;
use leptos::prelude::*;

use crate::domain::a005_media_file::api::API;
use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{
    use_list_screen, CellValue, ColumnDef, FilterKind, FilterOption, ListQuery, Row,
};
use crate::shared::number_format::format_file_size;

fn kind_options() -> Vec<FilterOption> {
    MediaKind::ALL
        .iter()
        .map(|k| FilterOption::new(k.as_str(), k.label()))
        .collect()
}

pub fn media_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("filename", "File")
            .with_search(query.search("filename"))
            .with_sort(query.sort("filename")),
        ColumnDef::new("type", "Type").with_filter(query.filter(
            "type",
            FilterKind::RadioGroup {
                options: kind_options(),
            },
        )),
        ColumnDef::new("size", "Size").with_sort(query.sort("size")),
        ColumnDef::new("createdAt", "Uploaded")
            .with_sort(query.sort("createdAt"))
            .with_filter(query.filter("createdAt", FilterKind::DateRange)),
    ]
}

pub fn media_row(file: MediaFile) -> Row {
    let kind = file.kind();
    let url = file.url.clone();
    let name = file
        .original_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| file.filename.clone());

    Row::new(file.id.clone())
        .cell(
            "filename",
            CellValue::view(move || {
                view! {
                    <a href=url.clone() target="_blank" rel="noopener">
                        {name.clone()}
                    </a>
                }
            }),
        )
        .cell("type", kind.label())
        .cell("size", format_file_size(file.size))
        .cell("createdAt", format_datetime(&file.created_at))
}

#[component]
pub fn MediaFilesList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<MediaFile>(API, FILES, trash);

    view! {
        <ResourceList
            screen=screen
            title="Media files"
            columns=Callback::new(media_columns)
            to_row=Callback::new(media_row)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_options() {
        let values: Vec<String> = kind_options().into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["image", "video", "audio", "document"]);
    }
}
