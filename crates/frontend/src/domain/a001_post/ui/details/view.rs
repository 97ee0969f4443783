use contracts::domain::a001_post::dto::PostStatus;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{PostDetailsViewModel, PostFormTarget};
use crate::shared::modal::Modal;
use crate::shared::notify::use_notify;

/// Форма создания/редактирования поста в модальном окне
#[component]
pub fn PostDetails(
    target: PostFormTarget,
    on_close: Callback<()>,
    /// Вызывается после успешного сохранения; список перезагружает вызывающий
    on_saved: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let title = if target.id().is_some() {
        "Edit post"
    } else {
        "New post"
    };
    let vm = PostDetailsViewModel::new(target);
    vm.load_if_needed(notify, on_close);

    // только Copy-захваты: дети Show должны быть Fn
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(notify, on_saved);
    };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <div class="details-loading"><Spinner /></div> }
            >
                <form class="details-form post-details" on:submit=on_submit>
                    <div class="form-group">
                        <label for="post-title">"Title"</label>
                        <input
                            type="text"
                            id="post-title"
                            prop:value=move || vm.form.with(|f| f.title.clone())
                            on:input=move |ev| vm.set_title(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="post-slug">"Slug"</label>
                        <input
                            type="text"
                            id="post-slug"
                            class:form-input--invalid=move || vm.slug_error.with(Option::is_some)
                            prop:value=move || vm.form.with(|f| f.slug.clone())
                            on:input=move |ev| vm.set_slug(event_target_value(&ev))
                        />
                        {move || {
                            vm.slug_error
                                .get()
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>

                    <div class="form-group">
                        <label for="post-status">"Status"</label>
                        <select
                            id="post-status"
                            prop:value=move || vm.form.with(|f| f.status.as_str())
                            on:change=move |ev| {
                                if let Ok(status) = event_target_value(&ev).parse::<PostStatus>() {
                                    vm.form.update(|f| f.status = status);
                                }
                            }
                        >
                            {PostStatus::ALL
                                .iter()
                                .map(|status| {
                                    view! { <option value=status.as_str()>{status.label()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="post-excerpt">"Excerpt"</label>
                        <textarea
                            id="post-excerpt"
                            rows="2"
                            prop:value=move || vm.form.with(|f| f.excerpt.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.excerpt = if value.trim().is_empty() { None } else { Some(value) };
                                });
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="post-content">"Content"</label>
                        <textarea
                            id="post-content"
                            rows="12"
                            prop:value=move || vm.form.with(|f| f.content.clone())
                            on:input=move |ev| vm.form.update(|f| f.content = event_target_value(&ev))
                        />
                    </div>

                    <div class="details-actions">
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || vm.saving.get()
                        >
                            {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                        </button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            "Cancel"
                        </Button>
                    </div>
                </form>
            </Show>
        </Modal>
    }
}
