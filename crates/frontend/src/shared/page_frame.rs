//! PageFrame: standard root wrapper for every page of the dashboard.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id` in the form `"{entity}--{category}"`, e.g. `"resource--list"`
//!   - `data-page-category`, one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// System pages (login, errors).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `list`   → `page`
/// - `system` → `page page--system`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
