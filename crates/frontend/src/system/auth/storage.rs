//! Токены сессии в localStorage

use web_sys::{window, Storage};

const ACCESS_TOKEN_KEY: &str = "cms_admin.access_token";
const REFRESH_TOKEN_KEY: &str = "cms_admin.refresh_token";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn write(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, {} not saved", key);
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("Failed to write {} to localStorage", key);
    }
}

/// Пустая строка считается отсутствующим токеном
fn read(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Save both tokens after login
pub fn save_tokens(access_token: &str, refresh_token: &str) {
    write(ACCESS_TOKEN_KEY, access_token);
    write(REFRESH_TOKEN_KEY, refresh_token);
}

/// После refresh меняется только access token
pub fn save_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn get_refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
