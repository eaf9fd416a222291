use std::sync::Arc;

use tracing::{info, trace};

use crate::session::SessionStore;

use super::{Location, ResolvedRoute};

pub const LOGIN_PATH: &str = "/login";
pub const REDIRECT_QUERY_KEY: &str = "redirect";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Location),
}

/// Before-navigation check for routes flagged `requires_auth`.
///
/// Only the presence of a token matters; its contents are never inspected.
#[derive(Clone)]
pub struct RouteGuard {
    session: Arc<SessionStore>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub fn before_each(&self, to: &ResolvedRoute) -> GuardDecision {
        if !to.route.requires_auth {
            return GuardDecision::Allow;
        }

        if self.session.has_token() {
            trace!("Token present, entering {}", to.location.path);
            return GuardDecision::Allow;
        }

        let intended = to.location.full_path();
        info!("No token stored, redirecting {} to login", intended);
        GuardDecision::Redirect(Location::new(LOGIN_PATH).with_query(REDIRECT_QUERY_KEY, &intended))
    }
}
