use contracts::domain::a007_campaign::dto::Campaign;
use contracts::system::auth::claims::CAMPAIGNS;
use leptos::prelude::*;

use crate::domain::a007_campaign::api::API;
use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{use_list_screen, ColumnDef, ListQuery, Row};

pub fn campaign_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Name")
            .with_search(query.search("name"))
            .with_sort(query.sort("name")),
        ColumnDef::new("description", "Description"),
        ColumnDef::new("emailsNum", "Emails").with_sort(query.sort("emailsNum")),
        ColumnDef::new("createdAt", "Created").with_sort(query.sort("createdAt")),
    ]
}

pub fn campaign_row(campaign: Campaign) -> Row {
    Row::new(campaign.id)
        .cell("name", campaign.name)
        .cell("description", campaign.description.unwrap_or_default())
        .cell("emailsNum", campaign.emails_num)
        .cell("createdAt", format_datetime(&campaign.created_at))
}

#[component]
pub fn CampaignsList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<Campaign>(API, CAMPAIGNS, trash);

    view! {
        <ResourceList
            screen=screen
            title="Campaigns"
            columns=Callback::new(campaign_columns)
            to_row=Callback::new(campaign_row)
        />
    }
}
