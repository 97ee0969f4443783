use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::system::auth::context::{do_login, use_auth};

/// Текст ошибки входа для пользователя
fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized | ApiError::NotAuthenticated => {
            "Invalid username or password".to_string()
        }
        ApiError::Http { message, .. } => format!("Login failed: {}", message),
        ApiError::Network(_) => "Server is unreachable. Check your connection.".to_string(),
        other => format!("Login failed: {}", other),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // успешный вход переключает ProtectedLayout на рабочую область
            if let Err(e) = do_login(set_auth_state, username_val, password_val).await {
                log::warn!("Login failed: {}", e);
                set_error_message.try_set(Some(login_error_message(&e)));
            }
            set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"CMS Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            login_error_message(&ApiError::Unauthorized),
            "Invalid username or password"
        );
        let err = ApiError::from_status(429, r#"{"message": "Too many attempts"}"#);
        assert_eq!(login_error_message(&err), "Login failed: Too many attempts");
        assert!(login_error_message(&ApiError::Network("x".into())).contains("unreachable"));
    }
}
