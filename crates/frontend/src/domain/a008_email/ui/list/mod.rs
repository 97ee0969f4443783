use contracts::domain::a008_email::dto::Email;
use contracts::system::auth::claims::EMAILS;
use leptos::prelude::*;

use crate::domain::a008_email::api::API;
use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{
    use_list_screen, ColumnDef, FilterKind, FilterOption, ListQuery, Row,
};

pub fn email_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("subject", "Subject")
            .with_search(query.search("subject"))
            .with_sort(query.sort("subject")),
        ColumnDef::new("campaign", "Campaign"),
        ColumnDef::new("recipientsNum", "Recipients")
            .with_sort(query.sort("recipientsNum"))
            .with_filter(query.filter_gte("recipientsNum", "At least")),
        ColumnDef::new("sentAt", "Sent").with_filter(query.filter(
            "sent",
            FilterKind::RadioGroup {
                options: vec![
                    FilterOption::new("true", "Sent"),
                    FilterOption::new("false", "Not sent"),
                ],
            },
        )),
        ColumnDef::new("createdAt", "Created").with_sort(query.sort("createdAt")),
    ]
}

pub fn email_row(email: Email) -> Row {
    let sent_at = email
        .sent_at
        .as_ref()
        .map(format_datetime)
        .unwrap_or_else(|| "Not sent".to_string());
    Row::new(email.id)
        .cell("subject", email.subject)
        .cell("campaign", email.campaign.map(|c| c.name).unwrap_or_default())
        .cell("recipientsNum", email.recipients_num)
        .cell("sentAt", sent_at)
        .cell("createdAt", format_datetime(&email.created_at))
}

#[component]
pub fn EmailsList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<Email>(API, EMAILS, trash);

    view! {
        <ResourceList
            screen=screen
            title="Emails"
            columns=Callback::new(email_columns)
            to_row=Callback::new(email_row)
        />
    }
}
