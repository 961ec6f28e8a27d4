// SPDX-License-Identifier: MPL-2.0
//! Client-side routing: the route table, path matching and the route guard.
//!
//! Paths look like browser locations (`/extraction/invoice?x=1#top`).
//! [`resolve`] maps a path to the view it shows and whether that view needs a
//! signed-in user; [`guard`] and [`guard_route`] then decide whether to render
//! it or redirect to [`PUBLIC_ROUTE`].
//!
//! # Example
//!
//! ```
//! use doc_extract::routing::{self, View};
//!
//! let route = routing::resolve("/extraction/invoice");
//! assert_eq!(route.view, View::Extraction);
//! assert!(route.protected);
//! assert_eq!(route.params.get("type"), Some("invoice"));
//! ```

mod guard;

pub use guard::{guard, guard_route, Guarded, Redirect};

use std::collections::BTreeMap;

/// Landing route, also the redirect target for protected routes.
pub const PUBLIC_ROUTE: &str = "/";

/// Route of the signed-in home view.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Views the router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Dashboard,
    Extraction,
    History,
    Templates,
    NotFound,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Slash-separated segments; `:name` captures one segment.
    pub pattern: &'static str,
    pub view: View,
    pub protected: bool,
}

/// Route table, matched top to bottom.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        pattern: "/",
        view: View::Home,
        protected: false,
    },
    RouteDescriptor {
        pattern: "/dashboard",
        view: View::Dashboard,
        protected: true,
    },
    RouteDescriptor {
        pattern: "/extraction/:type",
        view: View::Extraction,
        protected: true,
    },
    RouteDescriptor {
        pattern: "/history",
        view: View::History,
        protected: true,
    },
    RouteDescriptor {
        pattern: "/templates",
        view: View::Templates,
        protected: true,
    },
    // Preferences reuse the dashboard until they get a view of their own.
    RouteDescriptor {
        pattern: "/settings",
        view: View::Dashboard,
        protected: true,
    },
];

/// Segments captured by `:name` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Result of resolving a path against [`ROUTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Normalized path, without query, fragment or trailing slash.
    pub path: String,
    pub view: View,
    pub protected: bool,
    pub params: RouteParams,
    /// Fragment (`/#pricing` → `pricing`), used to scroll to a section.
    pub fragment: Option<String>,
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    let mut params = RouteParams::default();

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    params.insert(name, actual);
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Matches `path` against the route table. Unknown paths resolve to
/// [`View::NotFound`], which is public.
#[must_use]
pub fn resolve(path: &str) -> RouteMatch {
    let (without_fragment, fragment) = match path.split_once('#') {
        Some((before, after)) => (before, Some(after).filter(|f| !f.is_empty())),
        None => (path, None),
    };
    let without_query = without_fragment
        .split_once('?')
        .map_or(without_fragment, |(before, _)| before);

    let normalized = format!("/{}", segments(without_query).collect::<Vec<_>>().join("/"));
    let fragment = fragment.map(str::to_string);

    for descriptor in ROUTES {
        if let Some(params) = match_pattern(descriptor.pattern, &normalized) {
            return RouteMatch {
                path: normalized,
                view: descriptor.view,
                protected: descriptor.protected,
                params,
                fragment,
            };
        }
    }

    tracing::debug!(path, "no route matched");
    RouteMatch {
        path: normalized,
        view: View::NotFound,
        protected: false,
        params: RouteParams::default(),
        fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_static_routes() {
        assert_eq!(resolve("/").view, View::Home);
        assert!(!resolve("/").protected);
        assert_eq!(resolve("/dashboard").view, View::Dashboard);
        assert_eq!(resolve("/history").view, View::History);
        assert_eq!(resolve("/templates").view, View::Templates);
        assert_eq!(resolve("/settings").view, View::Dashboard);
    }

    #[test]
    fn every_route_except_home_is_protected() {
        for descriptor in ROUTES {
            assert_eq!(descriptor.protected, descriptor.pattern != PUBLIC_ROUTE);
        }
    }

    #[test]
    fn captures_params() {
        let route = resolve("/extraction/bank");
        assert_eq!(route.view, View::Extraction);
        assert_eq!(route.params.get("type"), Some("bank"));
        assert_eq!(route.params.iter().count(), 1);
    }

    #[test]
    fn extraction_requires_a_type_segment() {
        assert_eq!(resolve("/extraction").view, View::NotFound);
        assert_eq!(resolve("/extraction/a/b").view, View::NotFound);
    }

    #[test]
    fn strips_query_fragment_and_trailing_slash() {
        let route = resolve("/dashboard/?tab=recent");
        assert_eq!(route.view, View::Dashboard);
        assert_eq!(route.path, "/dashboard");

        let route = resolve("/#pricing");
        assert_eq!(route.view, View::Home);
        assert_eq!(route.fragment.as_deref(), Some("pricing"));
        assert_eq!(resolve("/#").fragment, None);
    }

    #[test]
    fn unknown_paths_are_public_not_found() {
        let route = resolve("/nope");
        assert_eq!(route.view, View::NotFound);
        assert!(!route.protected);
        assert!(route.params.is_empty());
        assert_eq!(resolve("").path, "/");
    }
}
