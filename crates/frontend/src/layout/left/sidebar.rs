//! Sidebar: группы меню, пункты которых видны только при наличии read-claim ресурса

use contracts::system::auth::claims::{
    CAMPAIGNS_READ, CATEGORIES_READ, COMMENTS_READ, EMAILS_READ, FILES_READ, POSTS_READ,
    SUBSCRIBERS_READ, TAGS_READ, USERS_READ,
};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::claims::can_render;
use crate::system::auth::context::use_claims;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
    claim: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<MenuItem>,
}

fn item(path: &'static str, label: &'static str, icon: &'static str, claim: &'static str) -> MenuItem {
    MenuItem {
        path,
        label,
        icon,
        claim,
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "content",
            label: "Content",
            items: vec![
                item("/posts", "Posts", "posts", POSTS_READ),
                item("/comments", "Comments", "comments", COMMENTS_READ),
                item("/categories", "Categories", "categories", CATEGORIES_READ),
                item("/tags", "Tags", "tags", TAGS_READ),
                item("/files", "Media files", "files", FILES_READ),
            ],
        },
        MenuGroup {
            id: "newsletter",
            label: "Newsletter",
            items: vec![
                item("/campaigns", "Campaigns", "campaigns", CAMPAIGNS_READ),
                item("/emails", "Emails", "emails", EMAILS_READ),
                item("/subscribers", "Subscribers", "subscribers", SUBSCRIBERS_READ),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            items: vec![item("/users", "Users", "users", USERS_READ)],
        },
    ]
}

/// Группы с пунктами, доступными пользователю; пустые группы не показываются
fn visible_groups<S: AsRef<str>>(granted: &[S]) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|i| can_render(&[i.claim], granted));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let granted = use_claims();
    let groups = Memo::new(move |_| granted.with(|g| visible_groups(g)));

    view! {
        <nav class="app-sidebar__content">
            <For
                each=move || groups.get()
                key=|group| group.id
                children=move |group| {
                    view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <A href=item.path attr:class="app-sidebar__item">
                                            <span class="app-sidebar__item-content">
                                                {icon(item.icon)}
                                                <span>{item.label}</span>
                                            </span>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            />
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_filtered_by_read_claims() {
        let granted = vec![POSTS_READ.to_string(), SUBSCRIBERS_READ.to_string()];
        let groups = visible_groups(&granted);
        let paths: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.path))
            .collect();
        assert_eq!(paths, vec!["/posts", "/subscribers"]);
        assert!(groups.iter().all(|g| g.id != "settings"));
    }

    #[test]
    fn test_guest_sees_no_menu() {
        let granted: Vec<String> = vec![];
        assert!(visible_groups(&granted).is_empty());
    }
}
