use contracts::system::access::{can_access, Page};
use contracts::system::auth::{LoginResponse, UserRole};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_error::ApiError;

/// Session of the signed-in user.
///
/// Provided through context at the root and handed explicitly to whoever
/// needs the token or the role.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub role: UserRole,
    pub name: String,
}

impl AuthState {
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            access_token: Some(response.access),
            refresh_token: Some(response.refresh),
            role: response.user.role,
            name: response.user.name,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn can_access(&self, page: Page) -> bool {
        self.is_authenticated() && can_access(self.role, page)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(storage::load_session());

    if auth_state.with_untracked(AuthState::is_authenticated) {
        log::info!("session restored from storage");
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;
    let state = AuthState::from_login(response);

    storage::save_session(&state);
    log::info!("login ok, role={}", state.role.code());
    set_auth_state.set(state);

    Ok(())
}

/// Helper: Perform logout
///
/// The backend call is best effort; the local session is always cleared.
pub async fn do_logout(auth_state: ReadSignal<AuthState>, set_auth_state: WriteSignal<AuthState>) {
    let state = auth_state.get_untracked();
    if let Some(refresh) = state.refresh_token {
        if let Err(e) = api::logout(state.access_token, refresh).await {
            log::warn!("logout request failed: {}", e);
        }
    }

    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::SessionUser;

    #[test]
    fn test_state_from_login() {
        let state = AuthState::from_login(LoginResponse {
            access: "a".into(),
            refresh: "r".into(),
            user: SessionUser {
                role: UserRole::Auxiliar,
                name: "Pepa".into(),
            },
        });
        assert!(state.is_authenticated());
        assert!(state.can_access(Page::PedidosPendientes));
        assert!(!state.can_access(Page::RealizarPedido));
    }

    #[test]
    fn test_anonymous_cannot_access_anything() {
        let state = AuthState::default();
        assert!(!state.can_access(Page::Home));
    }
}
