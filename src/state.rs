use crate::signup_client::SignupClient;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use derive_getters::Getters;
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;

#[derive(Clone, Getters)]
pub struct AppState {
    signup_client: Arc<SignupClient>,
    #[getter(skip)]
    flash_key: Key,
}

impl AppState {
    /// Create the shared application state.
    ///
    /// The `hmac_secret` signs the flash message cookies and must be at least
    /// 64 bytes long.
    pub fn create(signup_client: SignupClient, hmac_secret: &Secret<String>) -> Self {
        Self {
            signup_client: Arc::new(signup_client),
            flash_key: Key::from(hmac_secret.expose_secret().as_bytes()),
        }
    }
}

impl FromRef<AppState> for Arc<SignupClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.signup_client.clone()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.flash_key.clone()
    }
}
