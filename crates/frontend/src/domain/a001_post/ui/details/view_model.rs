use contracts::domain::a001_post::dto::{Post, SavePostDto};
use contracts::shared::ErrorCode;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_post::api;
use crate::shared::api_utils::ApiError;
use crate::shared::notify::Notify;

/// Что открыто в форме
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFormTarget {
    New,
    Existing(String),
}

impl PostFormTarget {
    pub fn id(&self) -> Option<&str> {
        match self {
            PostFormTarget::New => None,
            PostFormTarget::Existing(id) => Some(id),
        }
    }
}

/// Причина неудачного сохранения, как её показывает форма
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveFailure {
    /// Ошибка под полем slug плюс toast
    DuplicateSlug,
    /// Только общий toast
    Other,
}

impl SaveFailure {
    pub fn from_error(error: &ApiError) -> Self {
        match error.error_code() {
            Some(ErrorCode::DuplicateSlug) => SaveFailure::DuplicateSlug,
            _ => SaveFailure::Other,
        }
    }
}

pub const DUPLICATE_SLUG_FIELD: &str = "This slug is already used by another post";
pub const DUPLICATE_SLUG_TOAST: &str = "A post with this slug already exists";

/// slug из заголовка: латиница и цифры в нижнем регистре, остальное схлопывается в `-`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Проверка перед отправкой; backend валидирует ещё раз
pub fn validate(form: &SavePostDto) -> Result<(), &'static str> {
    if form.title.trim().is_empty() {
        return Err("Title is required");
    }
    if form.slug.trim().is_empty() {
        return Err("Slug is required");
    }
    if slugify(&form.slug) != form.slug {
        return Err("Slug may contain only lowercase letters, digits and dashes");
    }
    Ok(())
}

/// Отправка формы принимается, пока пост не загружается и не сохраняется
pub fn accepts_submit(loading: bool, saving: bool) -> bool {
    !loading && !saving
}

/// ViewModel for Post details form
#[derive(Clone, Copy)]
pub struct PostDetailsViewModel {
    pub target: StoredValue<PostFormTarget>,
    pub form: RwSignal<SavePostDto>,
    /// Пользователь правил slug руками; после этого он не следует за заголовком
    pub slug_touched: RwSignal<bool>,
    pub slug_error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl PostDetailsViewModel {
    pub fn new(target: PostFormTarget) -> Self {
        Self {
            target: StoredValue::new(target),
            form: RwSignal::new(SavePostDto::default()),
            slug_touched: RwSignal::new(false),
            slug_error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn set_title(&self, title: String) {
        let follow = !self.slug_touched.get_untracked();
        self.form.update(|f| {
            if follow {
                f.slug = slugify(&title);
            }
            f.title = title;
        });
    }

    pub fn set_slug(&self, slug: String) {
        self.slug_touched.set(true);
        self.slug_error.set(None);
        self.form.update(|f| f.slug = slug);
    }

    fn apply(&self, post: &Post) {
        self.form.set(SavePostDto::from_post(post));
        self.slug_touched.set(true);
    }

    /// Load form data from server if editing an existing post
    pub fn load_if_needed(&self, notify: Notify, on_close: Callback<()>) {
        let Some(id) = self.target.with_value(|t| t.id().map(str::to_string)) else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_post(&id).await {
                Ok(post) => {
                    vm.apply(&post);
                    vm.loading.try_set(false);
                }
                Err(e) => {
                    log::error!("Failed to load post {}: {}", id, e);
                    notify.generic_error();
                    on_close.run(());
                }
            }
        });
    }

    /// Обработчик submit формы
    pub fn submit(&self, notify: Notify, on_saved: Callback<()>) {
        if accepts_submit(self.loading.get_untracked(), self.saving.get_untracked()) {
            self.save_command(notify, on_saved);
        }
    }

    /// Save form data to server
    pub fn save_command(&self, notify: Notify, on_saved: Callback<()>) {
        let target = self.target.get_value();
        let current = self.form.get_untracked();
        if let Err(message) = validate(&current) {
            notify.error(message);
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        vm.slug_error.set(None);
        spawn_local(async move {
            let result = match &target {
                PostFormTarget::New => api::create_post(&current).await,
                PostFormTarget::Existing(id) => api::update_post(id, &current).await,
            };
            vm.saving.try_set(false);

            match result {
                Ok(post) => {
                    log::info!("Post {} saved", post.id);
                    notify.success("Post saved");
                    on_saved.run(());
                }
                Err(e) => match SaveFailure::from_error(&e) {
                    SaveFailure::DuplicateSlug => {
                        vm.slug_error.try_set(Some(DUPLICATE_SLUG_FIELD.to_string()));
                        notify.error(DUPLICATE_SLUG_TOAST);
                    }
                    SaveFailure::Other => {
                        log::error!("Failed to save post: {}", e);
                        notify.generic_error();
                    }
                },
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust 2024  edition "), "rust-2024-edition");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_validate() {
        let mut form = SavePostDto {
            title: "Hello".into(),
            slug: "hello".into(),
            ..SavePostDto::default()
        };
        assert!(validate(&form).is_ok());

        form.slug = "Hello World".into();
        assert!(validate(&form).is_err());

        form.slug = String::new();
        assert_eq!(validate(&form), Err("Slug is required"));

        form.title = "   ".into();
        assert_eq!(validate(&form), Err("Title is required"));
    }

    #[test]
    fn test_duplicate_slug_is_field_error() {
        let err = ApiError::from_status(
            409,
            r#"{"statusCode": 409, "message": "Conflict", "code": "DUPLICATE_SLUG"}"#,
        );
        assert_eq!(SaveFailure::from_error(&err), SaveFailure::DuplicateSlug);

        let err = ApiError::from_status(500, "oops");
        assert_eq!(SaveFailure::from_error(&err), SaveFailure::Other);
        assert_eq!(
            SaveFailure::from_error(&ApiError::Network("offline".into())),
            SaveFailure::Other
        );
    }

    #[test]
    fn test_submit_ignored_while_busy() {
        assert!(accepts_submit(false, false));
        assert!(!accepts_submit(true, false));
        assert!(!accepts_submit(false, true));
    }

    #[test]
    fn test_target_id() {
        assert_eq!(PostFormTarget::New.id(), None);
        assert_eq!(PostFormTarget::Existing("p1".into()).id(), Some("p1"));
    }
}
