// ============================================================================
// AUTH SERVICE - Login/logout against the backend + credential store
// ============================================================================

use crate::error::AppError;
use crate::models::{DeviceInfo, LoginRequest, Role, Session};
use crate::services::api_client::ShipmentApi;
use crate::utils::constants::{
    STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_DEVICE_ID, STORAGE_KEY_ROLE, STORAGE_KEY_USER_ID,
};
use crate::utils::jwt;
use crate::utils::storage::CredentialStore;

pub struct AuthService<A, S> {
    api: A,
    store: S,
}

impl<A: ShipmentApi, S: CredentialStore> AuthService<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Authenticates and persists the session.
    ///
    /// Nothing is written to the store unless the role is known and the
    /// token carries a readable expiry.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        device: impl FnOnce(String) -> DeviceInfo,
    ) -> Result<Session, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let request = LoginRequest {
            email_or_username: username.to_string(),
            password: password.to_string(),
            device_info: device(self.device_id()),
        };
        let response = self.api.login(&request).await?;

        let role = Role::from_slug(&response.roles.slug)?;
        let expires_at = jwt::decode_expiry(&response.access_token)?;

        let session = Session {
            auth_token: response.access_token,
            role,
            role_slug: response.roles.slug,
            user_id: response.user.id,
            expires_at,
        };
        self.persist(&session)?;

        log::info!("✅ Logged in as {:?} ({})", session.role, session.user_id);
        Ok(session)
    }

    /// Removes the stored session right away. Runs before the server is
    /// told so a reload mid-logout cannot restore the old session.
    pub fn end_session(&self) {
        self.store.clear_session();
        log::info!("👋 Session cleared");
    }

    /// Tells the server the token is done. Touches only the network, so a
    /// late answer cannot disturb a session created in the meantime.
    pub async fn revoke(&self, token: &str) {
        match self.api.logout(token).await {
            Ok(()) => log::info!("✅ Token revoked on server"),
            Err(e) => log::warn!("⚠️ Server logout failed, local session already cleared: {}", e),
        }
    }

    fn persist(&self, session: &Session) -> Result<(), AppError> {
        let written = self
            .store
            .set(STORAGE_KEY_AUTH_TOKEN, &session.auth_token)
            .and_then(|_| self.store.set(STORAGE_KEY_ROLE, &session.role_slug))
            .and_then(|_| self.store.set(STORAGE_KEY_USER_ID, &session.user_id));

        if written.is_err() {
            // A partial session would fail the guard later; keep all or none
            self.store.clear_session();
        }
        written
    }

    /// Stable per-install identifier, created on first use
    fn device_id(&self) -> String {
        if let Some(id) = self.store.get(STORAGE_KEY_DEVICE_ID) {
            return id;
        }
        let id = uuid::Uuid::new_v4().to_string();
        if let Err(e) = self.store.set(STORAGE_KEY_DEVICE_ID, &id) {
            log::warn!("⚠️ Device id not persisted: {}", e);
        }
        id
    }
}
