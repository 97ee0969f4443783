use contracts::system::auth::claims::USERS;
use contracts::system::users::{User, UserRole};
use leptos::prelude::*;

use crate::shared::components::resource_list::ResourceList;
use crate::shared::date_utils::{format_date, format_optional_datetime};
use crate::shared::list_view::{
    use_list_screen, ColumnDef, FilterKind, FilterOption, ListQuery, Row,
};
use crate::system::users::api::API;

fn role_options() -> Vec<FilterOption> {
    UserRole::ALL
        .iter()
        .map(|r| FilterOption::new(r.as_str(), r.label()))
        .collect()
}

pub fn user_columns(query: ListQuery) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("username", "Username")
            .with_search(query.search("username"))
            .with_sort(query.sort("username")),
        ColumnDef::new("name", "Name"),
        ColumnDef::new("email", "Email").with_search(query.search("email")),
        ColumnDef::new("role", "Role").with_filter(query.filter(
            "role",
            FilterKind::RadioGroup {
                options: role_options(),
            },
        )),
        ColumnDef::new("lastLoginAt", "Last login").with_sort(query.sort("lastLoginAt")),
        ColumnDef::new("createdAt", "Registered")
            .with_sort(query.sort("createdAt"))
            .with_filter(query.filter("createdAt", FilterKind::DateRange)),
    ]
}

pub fn user_row(user: User) -> Row {
    Row::new(user.id.clone())
        .cell("username", user.username.clone())
        .cell("name", user.full_name())
        .cell("email", user.email.clone())
        .cell("role", user.role.label())
        .cell("lastLoginAt", format_optional_datetime(user.last_login_at.as_ref()))
        .cell("createdAt", format_date(&user.created_at))
}

#[component]
pub fn UsersList(trash: bool) -> impl IntoView {
    let screen = use_list_screen::<User>(API, USERS, trash);

    view! {
        <ResourceList
            screen=screen
            title="Users"
            columns=Callback::new(user_columns)
            to_row=Callback::new(user_row)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::CellValue;

    #[test]
    fn test_user_row() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1", "username": "ann", "email": "ann@example.com",
                "firstName": "Ann", "lastName": "Lee", "role": "editor",
                "createdAt": "2024-03-15T14:02:26Z"
            }"#,
        )
        .unwrap();
        let row = user_row(user);
        assert_eq!(row.get("role").and_then(CellValue::as_text).as_deref(), Some("Editor"));
        assert_eq!(row.get("lastLoginAt").and_then(CellValue::as_text).as_deref(), Some("—"));
        assert_eq!(row.get("createdAt").and_then(CellValue::as_text).as_deref(), Some("15.03.2024"));
    }

    #[test]
    fn test_role_options() {
        assert_eq!(role_options().len(), UserRole::ALL.len());
    }
}
