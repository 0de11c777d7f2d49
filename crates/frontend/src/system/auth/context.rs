use contracts::system::access::AuthClaims;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::storage::StoredSession;
use super::{api, storage};
use crate::shared::http::ApiClient;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored session is being validated; gates wait instead of redirecting.
    pub restoring: bool,
}

impl AuthState {
    pub fn signed_in(access_token: String, user_info: UserInfo) -> Self {
        Self {
            access_token: Some(access_token),
            user_info: Some(user_info),
            restoring: false,
        }
    }

    /// Claims snapshot. Anything short of a token plus a profile is
    /// anonymous.
    pub fn claims(&self) -> AuthClaims {
        match (&self.access_token, &self.user_info) {
            (Some(_), Some(user)) => AuthClaims::from_user(user),
            _ => AuthClaims::anonymous(),
        }
    }
}

/// Auth context provider component
///
/// Owns the single auth state of the application. It is replaced as a
/// whole by login, logout, session restore and the 401 interceptor.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let stored = storage::load_session();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: stored.is_some(),
        ..AuthState::default()
    });
    let claims = Memo::new(move |_| auth_state.with(AuthState::claims));

    let on_unauthorized = Callback::new(move |_: ()| {
        if auth_state.with_untracked(|s| s.access_token.is_some()) {
            log::warn!("session rejected by the server, signing out");
        }
        storage::clear_session();
        set_auth_state.set(AuthState::default());
    });

    provide_context(ApiClient::new(on_unauthorized));
    provide_context(auth_state);
    provide_context(set_auth_state);
    provide_context(claims);

    if let Some(session) = stored {
        spawn_local(async move {
            let restored = restore_session(session).await;
            // A login that completed meanwhile wins over the restore.
            set_auth_state.update(|state| {
                if state.restoring {
                    *state = restored;
                }
            });
        });
    }

    children()
}

/// Validate the stored access token, refreshing it once if rejected.
async fn restore_session(session: StoredSession) -> AuthState {
    match api::get_current_user(&session.access).await {
        Ok(user) => return AuthState::signed_in(session.access, user),
        Err(e) => log::info!("stored access token rejected: {}", e),
    }

    if let Some(refresh) = session.refresh {
        match api::refresh_token(refresh).await {
            Ok(response) => {
                storage::update_access_token(&response.access);
                match api::get_current_user(&response.access).await {
                    Ok(user) => return AuthState::signed_in(response.access, user),
                    Err(e) => log::warn!("profile fetch after refresh failed: {}", e),
                }
            }
            Err(e) => log::info!("session refresh failed: {}", e),
        }
    }

    storage::clear_session();
    AuthState::default()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Memoized claims of the current subject
pub fn use_claims() -> Memo<AuthClaims> {
    use_context::<Memo<AuthClaims>>().expect("AuthProvider not found in component tree")
}

/// Perform login and publish the new state
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(username, password).await?;

    storage::save_session(&StoredSession {
        access: response.access.clone(),
        refresh: Some(response.refresh),
    });
    log::info!("signed in as {}", response.user.username);
    set_auth_state.set(AuthState::signed_in(response.access, response.user));

    Ok(())
}

/// Perform logout. Revoking the refresh token is best effort; local state
/// is always cleared.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh).await {
            log::warn!("refresh token revocation failed: {}", e);
        }
    }

    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
