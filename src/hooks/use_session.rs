// ============================================================================
// USE SESSION HOOK - Session + navigation owned by the app root
// ============================================================================
// The guard runs once at startup and again on every navigation. Screens get
// the handle through context and never read the credential store themselves.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use yew::prelude::*;

use crate::error::AppError;
use crate::hooks::use_toast::Toaster;
use crate::models::{DeviceInfo, Route, Session};
use crate::services::{ApiClient, AuthService};
use crate::state::SessionState;
use crate::utils::now_secs;
use crate::utils::storage::{default_store, CredentialStore};
use crate::viewmodels::SessionGuard;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub session: Option<Session>,
    pub route: Route,
    pub logging_in: bool,
    pub navigate: Callback<Route>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    /// Reports an error from a screen; session errors sign the user out
    pub report: Callback<AppError>,
}

fn location_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

fn write_location(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_hash(&route.path()) {
        log::warn!("⚠️ Could not update location to {}: {:?}", route.path(), e);
    }
}

#[hook]
pub fn use_session(toaster: Toaster) -> UseSessionHandle {
    let store: Rc<Rc<dyn CredentialStore>> = use_memo((), |_| default_store());
    let state: Rc<SessionState> = use_memo((), |_| SessionState::new());

    let session = {
        let store = store.clone();
        let state = state.clone();
        use_state(move || {
            let guard = SessionGuard::new((*store).clone());
            guard.restore(&state, now_secs())
        })
    };

    let route = {
        let store = store.clone();
        let state = state.clone();
        use_state(move || {
            let guard = SessionGuard::new((*store).clone());
            guard.resolve(&state, location_route(), now_secs())
        })
    };
    let logging_in = use_state(|| false);
    // Route last written to the location bar; hash changes matching it are our own
    let shown: Rc<RefCell<Option<Route>>> = use_mut_ref(|| None);

    {
        let shown = shown.clone();
        use_effect_with((*route).clone(), move |current| {
            *shown.borrow_mut() = Some(current.clone());
            write_location(current);
            || ()
        });
    }

    let navigate = {
        let store = store.clone();
        let state = state.clone();
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |target: Route| {
            let guard = SessionGuard::new((*store).clone());
            let resolved = guard.resolve(&state, target, now_secs());
            // The guard may have invalidated an expired session
            if state.current() != *session {
                session.set(state.current());
            }
            route.set(resolved);
        })
    };

    let login = {
        let store = store.clone();
        let state = state.clone();
        let session = session.clone();
        let route = route.clone();
        let logging_in = logging_in.clone();
        let toaster = toaster.clone();
        Callback::from(move |(username, password): (String, String)| {
            if *logging_in {
                return;
            }
            logging_in.set(true);
            let auth = AuthService::new(ApiClient::new(), (*store).clone());
            let state = state.clone();
            let session = session.clone();
            let route = route.clone();
            let logging_in = logging_in.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth.login(&username, &password, DeviceInfo::for_browser).await {
                    Ok(new_session) => {
                        let home = Route::home_for(new_session.role);
                        state.set(new_session.clone());
                        session.set(Some(new_session));
                        route.set(home);
                    }
                    Err(e) => toaster.error(e.user_message()),
                }
                logging_in.set(false);
            });
        })
    };

    let logout = {
        let store = store.clone();
        let state = state.clone();
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |_| {
            let auth = AuthService::new(ApiClient::new(), (*store).clone());
            let token = state.current().map(|s| s.auth_token);
            // Storage is cleared before anything is awaited
            auth.end_session();
            state.invalidate();
            session.set(None);
            route.set(Route::Login);

            if let Some(token) = token {
                wasm_bindgen_futures::spawn_local(async move {
                    auth.revoke(&token).await;
                });
            }
        })
    };

    let report = {
        let store = store.clone();
        let state = state.clone();
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |err: AppError| {
            if err.is_session_error() {
                log::warn!("⚠️ Session rejected by server: {}", err);
                SessionGuard::new((*store).clone()).invalidate(&state);
                session.set(None);
                route.set(Route::Login);
            } else {
                toaster.error(err.user_message());
            }
        })
    };

    // Back/forward and hand-edited URLs go through the guard like any navigation
    {
        let navigate = navigate.clone();
        let shown = shown.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_| {
                    let target = location_route();
                    if shown.borrow().as_ref() == Some(&target) {
                        return;
                    }
                    log::info!("🧭 Location changed to {}", target.path());
                    navigate.emit(target);
                })
            });
            move || drop(listener)
        });
    }

    UseSessionHandle {
        session: (*session).clone(),
        route: (*route).clone(),
        logging_in: *logging_in,
        navigate,
        login,
        logout,
        report,
    }
}

/// Handle from the root's context
#[hook]
pub fn use_session_context() -> Option<UseSessionHandle> {
    use_context::<UseSessionHandle>()
}
