use tracing::{debug, warn};

use crate::{
    profile::ProfileId,
    route::{Route, RouteError},
};

/// Navigation state: the route on screen plus the history needed to go back.
///
/// The stack always holds at least the start route, so [`Router::current`] is total. Routing
/// never looks at profile data; whether a detail route names a real profile is only discovered
/// when its screen is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    /// A router sitting at the users list.
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }

    /// The route currently on screen.
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Every visited route, oldest first. The last one is [`Router::current`].
    pub fn history(&self) -> &[Route] {
        &self.stack
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Push the detail screen for `profile_id`.
    pub fn navigate_to_detail(&mut self, profile_id: ProfileId) {
        self.push(Route::Detail { profile_id });
    }

    /// Parse `path` and push the resulting route.
    ///
    /// A malformed path is rejected and leaves the stack as it was.
    pub fn navigate(&mut self, path: &str) -> Result<Route, RouteError> {
        let route = path.parse::<Route>().inspect_err(|e| {
            warn!("Rejected navigation to `{path}`: {e}");
        })?;
        self.push(route);

        Ok(route)
    }

    /// Pop the current route. Does nothing at the start route, returning `false`.
    pub fn navigate_back(&mut self) -> bool {
        if !self.can_go_back() {
            debug!("Ignoring back navigation at {}", self.current());
            return false;
        }

        let popped = self.stack.pop();
        debug!(
            "Navigated back from {} to {}",
            popped.unwrap_or_default(),
            self.current()
        );

        true
    }

    fn push(&mut self, route: Route) {
        debug!("Navigating from {} to {route}", self.current());
        self.stack.push(route);
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
