// ============================================================================
// SESSION GUARD - Credential check at the navigation root
// ============================================================================
// Reads the stored credentials, decodes the token expiry and decides whether
// the user may proceed. Never touches the network.
// ============================================================================

use crate::error::AppError;
use crate::models::{Role, Route, Session};
use crate::state::SessionState;
use crate::utils::constants::{STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_ROLE, STORAGE_KEY_USER_ID};
use crate::utils::jwt;
use crate::utils::storage::CredentialStore;

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Proceed(Session),
    Redirect(Route),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    Render,
    Redirect(Route),
}

pub struct SessionGuard<S> {
    store: S,
}

impl<S: CredentialStore> SessionGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates the stored session at `now` (seconds since the epoch).
    ///
    /// Missing credentials redirect without touching the store. Expired or
    /// unreadable credentials are purged before redirecting.
    pub fn check(&self, now: i64) -> GuardDecision {
        match self.load(now) {
            Ok(session) => GuardDecision::Proceed(session),
            Err(AppError::SessionMissing) => {
                log::info!("🔐 No stored session, redirecting to login");
                GuardDecision::Redirect(Route::Login)
            }
            Err(err) => {
                log::warn!("⚠️ Stored session rejected: {}", err);
                self.store.clear_session();
                GuardDecision::Redirect(Route::Login)
            }
        }
    }

    fn load(&self, now: i64) -> Result<Session, AppError> {
        let token = self.non_empty(STORAGE_KEY_AUTH_TOKEN);
        let role_slug = self.non_empty(STORAGE_KEY_ROLE);
        let user_id = self.non_empty(STORAGE_KEY_USER_ID);

        let (auth_token, role_slug, user_id) = match (token, role_slug, user_id) {
            (Some(t), Some(r), Some(u)) => (t, r, u),
            _ => return Err(AppError::SessionMissing),
        };

        let expires_at = jwt::decode_expiry(&auth_token)?;
        if jwt::is_expired(expires_at, now) {
            return Err(AppError::SessionExpired);
        }
        let role = Role::from_slug(&role_slug)?;

        Ok(Session {
            auth_token,
            role,
            role_slug,
            user_id,
            expires_at,
        })
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|value| !value.trim().is_empty())
    }

    /// Startup entry point: loads the process-wide session once
    pub fn restore(&self, state: &SessionState, now: i64) -> Option<Session> {
        state.load_once(|| match self.check(now) {
            GuardDecision::Proceed(session) => Some(session),
            GuardDecision::Redirect(_) => None,
        })
    }

    /// Decides whether `route` may render for the current session.
    ///
    /// An in-memory session that expired since startup is invalidated here,
    /// together with its stored keys.
    pub fn authorize(&self, state: &SessionState, route: &Route, now: i64) -> RouteDecision {
        let session = match state.current() {
            Some(session) if session.is_expired_at(now) => {
                log::info!("⏰ Session expired, signing out");
                self.invalidate(state);
                None
            }
            other => other,
        };

        match (session, route.is_protected()) {
            (None, false) => RouteDecision::Render,
            (None, true) => RouteDecision::Redirect(Route::Login),
            (Some(session), false) => RouteDecision::Redirect(Route::home_for(session.role)),
            (Some(session), true) if route.allows(session.role) => RouteDecision::Render,
            (Some(session), true) => {
                log::warn!("⚠️ {:?} may not open {}", session.role, route.path());
                RouteDecision::Redirect(Route::home_for(session.role))
            }
        }
    }

    /// Follows `authorize` redirects from `target` to a route that renders
    pub fn resolve(&self, state: &SessionState, target: Route, now: i64) -> Route {
        let mut route = target;
        // Each redirect lands on Login or a role home, both of which render
        for _ in 0..3 {
            match self.authorize(state, &route, now) {
                RouteDecision::Render => break,
                RouteDecision::Redirect(next) => route = next,
            }
        }
        route
    }

    /// Forgets the session in memory and in the store
    pub fn invalidate(&self, state: &SessionState) {
        self.store.clear_session();
        state.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::STORAGE_KEY_DEVICE_ID;
    use crate::utils::jwt::make_token;
    use crate::utils::storage::MemoryCredentialStore;

    const NOW: i64 = 1_800_000_000;

    fn store_with(token: Option<String>, role: Option<&str>, uid: Option<&str>) -> MemoryCredentialStore {
        let store = MemoryCredentialStore::new();
        if let Some(token) = token {
            store.set(STORAGE_KEY_AUTH_TOKEN, &token).unwrap();
        }
        if let Some(role) = role {
            store.set(STORAGE_KEY_ROLE, role).unwrap();
        }
        if let Some(uid) = uid {
            store.set(STORAGE_KEY_USER_ID, uid).unwrap();
        }
        store
    }

    #[test]
    fn missing_token_or_role_redirects_to_login() {
        let no_token = store_with(None, Some("Munshi"), Some("u1"));
        assert_eq!(SessionGuard::new(no_token.clone()).check(NOW), GuardDecision::Redirect(Route::Login));
        // nothing purged for a merely absent session
        assert_eq!(no_token.get(STORAGE_KEY_ROLE).as_deref(), Some("Munshi"));

        let no_role = store_with(Some(make_token(NOW + 60)), None, Some("u1"));
        assert_eq!(SessionGuard::new(no_role).check(NOW), GuardDecision::Redirect(Route::Login));

        let blank_role = store_with(Some(make_token(NOW + 60)), Some(""), Some("u1"));
        assert_eq!(SessionGuard::new(blank_role).check(NOW), GuardDecision::Redirect(Route::Login));
    }

    #[test]
    fn expired_token_purges_all_three_keys() {
        let store = store_with(Some(make_token(NOW - 1)), Some("logistic_person"), Some("u1"));
        store.set(STORAGE_KEY_DEVICE_ID, "d1").unwrap();

        assert_eq!(SessionGuard::new(store.clone()).check(NOW), GuardDecision::Redirect(Route::Login));
        assert_eq!(store.get(STORAGE_KEY_AUTH_TOKEN), None);
        assert_eq!(store.get(STORAGE_KEY_ROLE), None);
        assert_eq!(store.get(STORAGE_KEY_USER_ID), None);
        assert_eq!(store.get(STORAGE_KEY_DEVICE_ID).as_deref(), Some("d1"));
    }

    #[test]
    fn undecodable_token_fails_closed() {
        let store = store_with(Some("garbage".into()), Some("Munshi"), Some("u1"));
        assert_eq!(SessionGuard::new(store.clone()).check(NOW), GuardDecision::Redirect(Route::Login));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_stored_role_is_no_session() {
        let store = store_with(Some(make_token(NOW + 60)), Some("admin"), Some("u1"));
        assert_eq!(SessionGuard::new(store.clone()).check(NOW), GuardDecision::Redirect(Route::Login));
        assert!(store.is_empty());
    }

    #[test]
    fn valid_session_proceeds() {
        let token = make_token(NOW + 3600);
        let store = store_with(Some(token.clone()), Some("security_gaurd"), Some("u9"));
        let decision = SessionGuard::new(store).check(NOW);
        assert_eq!(
            decision,
            GuardDecision::Proceed(Session {
                auth_token: token,
                role: Role::SecurityGuard,
                role_slug: "security_gaurd".into(),
                user_id: "u9".into(),
                expires_at: NOW + 3600,
            })
        );
    }

    #[test]
    fn authorize_routes_by_role() {
        let store = store_with(Some(make_token(NOW + 3600)), Some("Munshi"), Some("u1"));
        let guard = SessionGuard::new(store);
        let state = SessionState::new();
        assert!(guard.restore(&state, NOW).is_some());

        assert_eq!(guard.authorize(&state, &Route::MunshiShipments, NOW), RouteDecision::Render);
        assert_eq!(
            guard.authorize(&state, &Route::Login, NOW),
            RouteDecision::Redirect(Route::MunshiShipments)
        );
        assert_eq!(
            guard.authorize(&state, &Route::CreateShipment, NOW),
            RouteDecision::Redirect(Route::MunshiShipments)
        );
    }

    #[test]
    fn authorize_without_session() {
        let guard = SessionGuard::new(MemoryCredentialStore::new());
        let state = SessionState::new();
        assert_eq!(guard.restore(&state, NOW), None);
        assert_eq!(guard.authorize(&state, &Route::Login, NOW), RouteDecision::Render);
        assert_eq!(
            guard.authorize(&state, &Route::SecurityShipments, NOW),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn startup_without_token_lands_on_login() {
        let store = store_with(None, Some("logistic_person"), Some("u1"));
        let guard = SessionGuard::new(store.clone());
        let state = SessionState::new();

        assert_eq!(guard.restore(&state, NOW), None);
        assert_eq!(guard.resolve(&state, Route::ShipmentList, NOW), Route::Login);
        assert_eq!(
            guard.resolve(&state, Route::AssignTruck { shipment_id: "s1".into() }, NOW),
            Route::Login
        );
        assert_eq!(store.get(STORAGE_KEY_ROLE).as_deref(), Some("logistic_person"));
    }

    #[test]
    fn resolve_settles_on_the_role_home() {
        let store = store_with(Some(make_token(NOW + 3600)), Some("security"), Some("u1"));
        let guard = SessionGuard::new(store);
        let state = SessionState::new();
        guard.restore(&state, NOW);

        assert_eq!(guard.resolve(&state, Route::Login, NOW), Route::SecurityShipments);
        assert_eq!(guard.resolve(&state, Route::CreateShipment, NOW), Route::SecurityShipments);
        assert_eq!(guard.resolve(&state, Route::SecurityShipments, NOW), Route::SecurityShipments);
    }

    #[test]
    fn session_expiring_after_startup_is_invalidated() {
        let store = store_with(Some(make_token(NOW + 10)), Some("logistic_person"), Some("u1"));
        let guard = SessionGuard::new(store.clone());
        let state = SessionState::new();
        guard.restore(&state, NOW);

        assert_eq!(
            guard.authorize(&state, &Route::ShipmentList, NOW + 10),
            RouteDecision::Redirect(Route::Login)
        );
        assert_eq!(state.current(), None);
        assert!(store.is_empty());
    }
}
