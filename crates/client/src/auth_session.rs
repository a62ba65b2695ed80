//! Authentication session management.
//!
//! Holds the bearer token and the logged-in user's profile. The token is
//! persisted through [`crate::storage`] (cookie on web, config file on
//! desktop) so a reload keeps the session alive; the profile is re-fetched
//! from `GET /users/profile` on startup.

use dioxus::prelude::*;
use mandazap_shared::{ApiError, User};

use crate::api_client::ApiClient;
use crate::{storage, stores};

/// Backend base URL, fixed at build time.
pub fn api_base() -> String {
    option_env!("MANDAZAP_API_BASE")
        .unwrap_or("http://localhost:3333")
        .trim_end_matches('/')
        .to_string()
}

/// Authentication context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub token: Signal<Option<String>>,
    pub user: Signal<Option<User>>,
}

/// Provider component that sets up auth context
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let token = use_signal(storage::load_token);
    let user = use_signal(|| None::<User>);

    let mut auth = use_context_provider(|| AuthContext { token, user });

    // Keep the persisted token in sync with the signal.
    use_effect(move || match auth.token.read().as_ref() {
        Some(token) => storage::save_token(token),
        None => storage::remove_token(),
    });

    // Load the profile whenever a token appears without a user next to it
    // (fresh page load with a persisted cookie).
    use_effect(move || {
        let Some(token) = auth.token.read().clone() else {
            return;
        };
        if auth.user.peek().is_some() {
            return;
        }

        spawn(async move {
            let client = ApiClient::new()
                .with_base_url(api_base())
                .with_bearer_token(Some(token));
            match client.profile().await {
                Ok(profile) => auth.user.set(Some(profile)),
                Err(err) => {
                    crate::log_error!("Failed to load profile: {err}");
                    auth.handle_unauthorized(&err);
                }
            }
        });
    });

    children
}

impl AuthContext {
    /// Login with email and password, storing the returned token
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let client = ApiClient::new().with_base_url(api_base());
        let response = client.login(email, password).await?;
        self.user.set(Some(response.user));
        self.token.set(Some(response.access_token));
        Ok(())
    }

    /// Register a new account, storing the returned token
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(), ApiError> {
        let client = ApiClient::new().with_base_url(api_base());
        let response = client.register(email, password, name).await?;
        self.user.set(Some(response.user));
        self.token.set(Some(response.access_token));
        Ok(())
    }

    /// Logout and clear the session
    pub fn logout(&mut self) {
        stores::clear_all();
        storage::remove_token();
        self.token.set(None);
        self.user.set(None);
    }

    /// React to a 401: drop the session so the route guard sends the user
    /// back to the login screen. Returns true when the error was a 401.
    pub fn handle_unauthorized(&mut self, err: &ApiError) -> bool {
        if err.is_unauthorized() {
            crate::log_warn!("Session rejected by the backend, logging out");
            self.logout();
            true
        } else {
            false
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Create an API client configured for the current session
    pub fn client(&self) -> ApiClient {
        ApiClient::new()
            .with_base_url(api_base())
            .with_bearer_token(self.token.read().clone())
    }

    /// WebSocket URL for the event stream, or `None` while logged out.
    ///
    /// The token travels in the query string; browsers cannot set headers on
    /// WebSocket upgrades.
    pub fn socket_url(&self) -> Option<String> {
        let token = self.token.read().clone()?;
        let base = api_base();
        let ws_base = if base.starts_with("https://") {
            base.replacen("https://", "wss://", 1)
        } else {
            base.replacen("http://", "ws://", 1)
        };
        Some(format!(
            "{}/socket?token={}",
            ws_base.trim_end_matches('/'),
            urlencoding::encode(&token)
        ))
    }
}
