use leptos::prelude::*;

use super::claims::can_render;
use super::context::use_claims;

/// Рендерит children только если у пользователя есть все `claims`
#[component]
pub fn Can(
    /// Required claims
    #[prop(into)]
    claims: Vec<&'static str>,
    /// Что показать вместо children
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let granted = use_claims();
    let allowed = Signal::derive(move || granted.with(|g| can_render(&claims, g)));

    view! {
        <Show when=move || allowed.get() fallback=fallback>
            {children()}
        </Show>
    }
}
