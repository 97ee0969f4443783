use contracts::domain::a006_subscriber::dto::Subscriber;
use contracts::system::auth::claims::SUBSCRIBERS;
use leptos::prelude::*;

use crate::domain::a006_subscriber::api::API;
use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{
    use_list_screen, ColumnDef, FilterKind, FilterOption, ListQuery, Row,
};

pub fn subscriber_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("email", "Email")
            .with_search(query.search("email"))
            .with_sort(query.sort("email")),
        ColumnDef::new("subscribed", "Status").with_filter(query.filter(
            "subscribed",
            FilterKind::RadioGroup {
                options: vec![
                    FilterOption::new("true", "Subscribed"),
                    FilterOption::new("false", "Unsubscribed"),
                ],
            },
        )),
        ColumnDef::new("createdAt", "Joined")
            .with_sort(query.sort("createdAt"))
            .with_filter(query.filter("createdAt", FilterKind::DateRange)),
    ]
}

pub fn subscriber_row(subscriber: Subscriber) -> Row {
    let status = if subscriber.subscribed {
        "Subscribed"
    } else {
        "Unsubscribed"
    };
    Row::new(subscriber.id)
        .cell("email", subscriber.email)
        .cell("subscribed", status)
        .cell("createdAt", format_datetime(&subscriber.created_at))
}

#[component]
pub fn SubscribersList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<Subscriber>(API, SUBSCRIBERS, trash);

    view! {
        <ResourceList
            screen=screen
            title="Subscribers"
            columns=Callback::new(subscriber_columns)
            to_row=Callback::new(subscriber_row)
        />
    }
}
