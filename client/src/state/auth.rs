#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use wire::Viewer;

/// Authentication state tracking the current viewer and loading status.
///
/// Starts in `loading` so pages that redirect on "not signed in" wait for
/// the initial `/api/auth/me` round trip before deciding.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub viewer: Option<Viewer>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { viewer: None, loading: true }
    }
}

impl AuthState {
    /// Record the result of a sign-in or session fetch.
    pub fn settle(&mut self, viewer: Option<Viewer>) {
        self.viewer = viewer;
        self.loading = false;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.viewer.is_some()
    }
}
