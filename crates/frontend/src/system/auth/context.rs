use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Идёт восстановление сессии из localStorage
    pub restoring: bool,
}

impl AuthState {
    fn signed_in(access_token: String, user_info: UserInfo) -> Self {
        Self {
            access_token: Some(access_token),
            user_info: Some(user_info),
            restoring: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }

    pub fn claims(&self) -> Vec<String> {
        self.user_info
            .as_ref()
            .map(|u| u.claims.clone())
            .unwrap_or_default()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let has_token = storage::get_access_token().is_some();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: has_token,
        ..AuthState::default()
    });

    // Try to restore session from localStorage on mount
    if has_token {
        spawn_local(async move {
            set_auth_state.set(restore_session().await);
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

async fn restore_session() -> AuthState {
    match api::get_current_user().await {
        Ok(user_info) => {
            let token = storage::get_access_token().unwrap_or_default();
            return AuthState::signed_in(token, user_info);
        }
        Err(e) => log::warn!("Stored access token rejected: {}", e),
    }

    // Token invalid, try refresh
    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return AuthState::default();
    };

    let refreshed = match api::refresh_token(refresh_token).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Token refresh failed: {}", e);
            storage::clear_tokens();
            return AuthState::default();
        }
    };
    storage::save_access_token(&refreshed.access_token);

    match api::get_current_user().await {
        Ok(user_info) => AuthState::signed_in(refreshed.access_token, user_info),
        Err(e) => {
            log::warn!("Current user lookup failed after refresh: {}", e);
            storage::clear_tokens();
            AuthState::default()
        }
    }
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Claims текущего пользователя (пусто для гостя)
pub fn use_claims() -> Signal<Vec<String>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(AuthState::claims))
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;

    storage::save_tokens(&response.access_token, &response.refresh_token);
    set_auth_state.set(AuthState::signed_in(response.access_token, response.user));

    Ok(())
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }
    end_session(set_auth_state);
}

/// Сброс сессии без запроса к backend (например, после 401)
pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
