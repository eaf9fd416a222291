//! Route table and navigation guard
//!
//! ```text
//! navigate(path) → resolve route → guard.before_each
//!                                   ├→ Proceed
//!                                   └→ Redirect /login?redirect=<full path>
//! ```

mod guard;
mod location;

use std::sync::Arc;

use tracing::debug;

use crate::errors::{QuankError, Result};
use crate::session::SessionStore;

pub use guard::{GuardDecision, LOGIN_PATH, REDIRECT_QUERY_KEY, RouteGuard};
pub use location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    UserPanel,
    AdminPanel,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: RouteName,
    pub requires_auth: bool,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: RouteName::UserPanel,
        requires_auth: false,
    },
    Route {
        path: "/admin",
        name: RouteName::AdminPanel,
        requires_auth: true,
    },
    Route {
        path: LOGIN_PATH,
        name: RouteName::Login,
        requires_auth: false,
    },
];

/// A route matched against a concrete location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub route: Route,
    pub location: Location,
}

/// Outcome of a navigation after the guard ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed(ResolvedRoute),
    Redirected {
        from: Location,
        to: ResolvedRoute,
    },
}

impl Navigation {
    /// The route that ends up mounted
    pub fn destination(&self) -> &ResolvedRoute {
        match self {
            Navigation::Proceed(route) => route,
            Navigation::Redirected { to, .. } => to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirected { .. })
    }
}

pub struct Router {
    routes: &'static [Route],
    guard: RouteGuard,
}

impl Router {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            routes: ROUTES,
            guard: RouteGuard::new(session),
        }
    }

    pub fn resolve(&self, raw: &str) -> Result<ResolvedRoute> {
        let location = Location::parse(raw);
        let route = self
            .routes
            .iter()
            .find(|r| r.path == location.path)
            .copied()
            .ok_or_else(|| QuankError::not_found(format!("No route matches {}", location.path)))?;
        Ok(ResolvedRoute { route, location })
    }

    pub fn navigate(&self, raw: &str) -> Result<Navigation> {
        let target = self.resolve(raw)?;
        match self.guard.before_each(&target) {
            GuardDecision::Allow => {
                debug!("Navigation to {} allowed", target.location.full_path());
                Ok(Navigation::Proceed(target))
            }
            GuardDecision::Redirect(to) => {
                let to = self.resolve(&to.full_path())?;
                Ok(Navigation::Redirected {
                    from: target.location,
                    to,
                })
            }
        }
    }

    /// Where to go after a successful login from the given login location.
    pub fn post_login_target(login: &Location) -> String {
        login
            .query
            .get(REDIRECT_QUERY_KEY)
            .filter(|r| r.starts_with('/'))
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }
}
