use super::context::AuthState;
use contracts::system::auth::UserRole;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "token";
const REFRESH_TOKEN_KEY: &str = "refresh";
const ROLE_KEY: &str = "role";
const NAME_KEY: &str = "name";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.is_empty())
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Persist the whole session
pub fn save_session(state: &AuthState) {
    if let Some(token) = &state.access_token {
        set_item(ACCESS_TOKEN_KEY, token);
    }
    if let Some(refresh) = &state.refresh_token {
        set_item(REFRESH_TOKEN_KEY, refresh);
    }
    set_item(ROLE_KEY, state.role.code());
    set_item(NAME_KEY, &state.name);
}

/// Restore the session saved by a previous visit
pub fn load_session() -> AuthState {
    AuthState {
        access_token: get_item(ACCESS_TOKEN_KEY),
        refresh_token: get_item(REFRESH_TOKEN_KEY),
        role: get_item(ROLE_KEY)
            .map(|r| UserRole::from_code(&r))
            .unwrap_or_default(),
        name: get_item(NAME_KEY).unwrap_or_default(),
    }
}

/// Save a refreshed access token
pub fn save_access_token(token: &str) {
    set_item(ACCESS_TOKEN_KEY, token);
}

pub fn save_refresh_token(token: &str) {
    set_item(REFRESH_TOKEN_KEY, token);
}

/// Clear all authentication data
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ROLE_KEY, NAME_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
