// SPDX-License-Identifier: MPL-2.0
//! Session store: "am I logged in, and as whom".
//!
//! Two states, [`Session::Unauthenticated`] (initial) and
//! [`Session::Authenticated`]. [`SessionStore::login`] asks the injected
//! [`Authenticator`] for a profile, [`SessionStore::logout`] drops it. Both
//! are idempotent and notify subscribers with the resulting session.

use crate::application::port::{AuthError, Authenticator};
use crate::domain::session::{Profile, Session};
use crate::store::{Listeners, Unsubscribe};
use std::fmt;

pub struct SessionStore {
    session: Session,
    authenticator: Box<dyn Authenticator>,
    listeners: Listeners<Session>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl SessionStore {
    /// Creates an unauthenticated store that signs users in through
    /// `authenticator`.
    #[must_use]
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            session: Session::Unauthenticated,
            authenticator,
            listeners: Listeners::new(),
        }
    }

    /// Signs in. Calling it while already signed in replaces the profile with
    /// whatever the authenticator returns now.
    ///
    /// # Errors
    ///
    /// Propagates the authenticator's error; the session is left unchanged
    /// and subscribers are not notified.
    pub fn login(&mut self) -> Result<(), AuthError> {
        let profile = self.authenticator.authenticate().map_err(|err| {
            tracing::warn!(%err, "login rejected");
            err
        })?;

        tracing::info!(user = %profile.email, "signed in");
        self.session = Session::Authenticated { profile };
        self.listeners.notify(&self.session);
        Ok(())
    }

    /// Signs out, discarding the profile.
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            tracing::info!("signed out");
        }
        self.session = Session::Unauthenticated;
        self.listeners.notify(&self.session);
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Profile of the signed-in user, `None` when signed out.
    #[must_use]
    pub fn user(&self) -> Option<&Profile> {
        self.session.profile()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Registers a callback run with the resulting session after every login
    /// or logout.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: FnMut(&Session) + 'static,
    {
        self.listeners.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::demo::{demo_profile, DemoAuthenticator};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RejectingAuthenticator;

    impl Authenticator for RejectingAuthenticator {
        fn authenticate(&self) -> Result<Profile, AuthError> {
            Err(AuthError::InvalidCredentials)
        }
    }

    fn demo_store() -> SessionStore {
        SessionStore::new(Box::new(DemoAuthenticator))
    }

    #[test]
    fn starts_unauthenticated() {
        let store = demo_store();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert_eq!(store.session(), &Session::Unauthenticated);
    }

    #[test]
    fn login_sets_demo_profile() {
        let mut store = demo_store();
        store.login().expect("demo login never fails");
        assert!(store.is_authenticated());
        assert_eq!(store.user(), Some(&demo_profile()));
    }

    #[test]
    fn login_and_logout_are_idempotent() {
        let mut store = demo_store();
        store.login().unwrap();
        store.login().unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.user(), Some(&demo_profile()));

        store.logout();
        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn rejected_login_leaves_session_untouched() {
        let mut store = SessionStore::new(Box::new(RejectingAuthenticator));
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let _handle = store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert_eq!(store.login().unwrap_err(), AuthError::InvalidCredentials);
        assert!(!store.is_authenticated());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn subscribers_observe_each_transition() {
        let mut store = demo_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _handle = store.subscribe(move |session| sink.borrow_mut().push(session.is_authenticated()));

        store.login().unwrap();
        store.logout();
        store.logout();

        assert_eq!(*seen.borrow(), vec![true, false, false]);
    }
}
