//! Toast-уведомления поверх toaster'а thaw

use leptos::prelude::*;
use thaw::*;

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again later.";

/// Хэндл toaster'а, который можно копировать в обработчики и async-блоки
#[derive(Clone, Copy)]
pub struct Notify {
    toaster: StoredValue<ToasterInjection, LocalStorage>,
}

/// Требует `ToasterProvider` выше по дереву
pub fn use_notify() -> Notify {
    Notify {
        toaster: StoredValue::new_local(ToasterInjection::expect_context()),
    }
}

impl Notify {
    pub fn success(&self, message: impl Into<String>) {
        self.dispatch(message.into(), ToastIntent::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.dispatch(message.into(), ToastIntent::Error);
    }

    /// Общая ошибка для неудачных действий пользователя
    pub fn generic_error(&self) {
        self.error(GENERIC_ERROR);
    }

    fn dispatch(&self, message: String, intent: ToastIntent) {
        self.toaster.with_value(|toaster| {
            toaster.dispatch_toast(
                move || {
                    view! {
                        <Toast>
                            <ToastTitle>{message}</ToastTitle>
                        </Toast>
                    }
                },
                ToastOptions::default().with_intent(intent),
            );
        });
    }
}
