// ============================================================================
// SESSION STATE - Process-wide session, loaded once, invalidated explicitly
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::session::Session;

/// Shared handle; clones see the same session
#[derive(Clone, Default)]
pub struct SessionState {
    session: Rc<RefCell<Option<Session>>>,
    loaded: Rc<RefCell<bool>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `load` the first time only and caches its answer
    pub fn load_once(&self, load: impl FnOnce() -> Option<Session>) -> Option<Session> {
        if !*self.loaded.borrow() {
            let session = load();
            *self.session.borrow_mut() = session;
            *self.loaded.borrow_mut() = true;
        }
        self.current()
    }

    pub fn current(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn set(&self, session: Session) {
        *self.session.borrow_mut() = Some(session);
        *self.loaded.borrow_mut() = true;
    }

    /// Drops the in-memory session. Store cleanup is the caller's job.
    pub fn invalidate(&self) {
        *self.session.borrow_mut() = None;
        *self.loaded.borrow_mut() = true;
    }
}

impl PartialEq for SessionState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::Role;

    fn session() -> Session {
        Session {
            auth_token: "t".into(),
            role: Role::Munshi,
            role_slug: "Munshi".into(),
            user_id: "u1".into(),
            expires_at: 10,
        }
    }

    #[test]
    fn loads_only_once() {
        let state = SessionState::new();
        let mut calls = 0;
        state.load_once(|| {
            calls += 1;
            Some(session())
        });
        let again = state.load_once(|| {
            calls += 1;
            None
        });
        assert_eq!(calls, 1);
        assert_eq!(again, Some(session()));
    }

    #[test]
    fn invalidate_is_visible_through_clones() {
        let state = SessionState::new();
        let shared = state.clone();
        state.set(session());
        shared.invalidate();
        assert_eq!(state.current(), None);
        assert!(state == shared);
        // an invalidated state is not reloaded from storage
        assert_eq!(state.load_once(|| Some(session())), None);
    }
}
