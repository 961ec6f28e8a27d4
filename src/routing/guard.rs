// SPDX-License-Identifier: MPL-2.0
//! Route guard: render a protected view only for a signed-in user.
//!
//! The guard is a pure decision over the current session. Callers run it on
//! every render, so signing out while a protected view is shown redirects on
//! the next pass. There are no roles; being signed in is enough.

use super::{RouteMatch, RouteParams, View, PUBLIC_ROUTE};
use crate::session::SessionStore;

/// Where to send a user who may not see the requested view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
}

/// Outcome of guarding a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    Render(V),
    Redirect(Redirect),
}

impl<V> Guarded<V> {
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, Guarded::Redirect(_))
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Guarded<U> {
        match self {
            Guarded::Render(view) => Guarded::Render(f(view)),
            Guarded::Redirect(redirect) => Guarded::Redirect(redirect),
        }
    }
}

/// Builds `view` unless the route is protected and nobody is signed in, in
/// which case `view` is never called.
pub fn guard<V>(protected: bool, session: &SessionStore, view: impl FnOnce() -> V) -> Guarded<V> {
    if protected && !session.is_authenticated() {
        return Guarded::Redirect(Redirect { to: PUBLIC_ROUTE });
    }
    Guarded::Render(view())
}

/// [`guard`] driven by a resolved route. `render` receives the route's view
/// and its parameters exactly as captured.
pub fn guard_route<V>(
    route: &RouteMatch,
    session: &SessionStore,
    render: impl FnOnce(View, &RouteParams) -> V,
) -> Guarded<V> {
    let guarded = guard(route.protected, session, || render(route.view, &route.params));
    if guarded.is_redirect() {
        tracing::debug!(path = %route.path, "protected route requires sign-in");
    }
    guarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::demo::DemoAuthenticator;
    use crate::routing::resolve;
    use std::cell::Cell;

    fn signed_out() -> SessionStore {
        SessionStore::new(Box::new(DemoAuthenticator))
    }

    fn signed_in() -> SessionStore {
        let mut session = signed_out();
        session.login().unwrap();
        session
    }

    #[test]
    fn protected_route_redirects_when_signed_out_without_building_view() {
        let built = Cell::new(false);
        let result = guard(true, &signed_out(), || built.set(true));
        assert_eq!(result, Guarded::Redirect(Redirect { to: "/" }));
        assert!(!built.get());
    }

    #[test]
    fn protected_route_renders_when_signed_in() {
        assert_eq!(guard(true, &signed_in(), || 7), Guarded::Render(7));
    }

    #[test]
    fn public_route_renders_for_everyone() {
        assert_eq!(guard(false, &signed_out(), || "home"), Guarded::Render("home"));
        assert_eq!(guard(false, &signed_in(), || "home"), Guarded::Render("home"));
    }

    #[test]
    fn guard_route_passes_params_through() {
        let route = resolve("/extraction/invoice");
        let result = guard_route(&route, &signed_in(), |view, params| {
            (view, params.get("type").map(str::to_string))
        });
        assert_eq!(
            result,
            Guarded::Render((View::Extraction, Some("invoice".to_string())))
        );
    }

    #[test]
    fn logout_flips_the_next_evaluation() {
        let route = resolve("/history");
        let mut session = signed_in();
        assert!(!guard_route(&route, &session, |view, _| view).is_redirect());

        session.logout();
        assert!(guard_route(&route, &session, |view, _| view).is_redirect());
    }

    #[test]
    fn map_preserves_redirects() {
        let redirect: Guarded<u8> = Guarded::Redirect(Redirect { to: "/" });
        assert_eq!(redirect.map(|v| v + 1), Guarded::Redirect(Redirect { to: "/" }));
        assert_eq!(Guarded::Render(1u8).map(|v| v + 1), Guarded::Render(2));
    }
}
