//! Request lifecycle state machine for the search and cluster-detail
//! fetches.
//!
//! One session governs one view's fetch lifecycle. The states are
//! exhaustive, so impossible combinations (loading and error at once)
//! cannot be represented. Completions are applied through a generation
//! token: a response that arrives for a superseded request, or after the
//! session already settled, is ignored instead of clobbering newer state.

use tracing::debug;

/// Lifecycle of a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Proof that a completion belongs to a particular `begin` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug)]
pub struct RequestSession<T> {
    state: SessionState<T>,
    generation: u64,
}

impl<T> Default for RequestSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestSession<T> {
    pub fn new() -> Self {
        RequestSession {
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Starts a request, returning the token its completion must present.
    ///
    /// Returns `None` while a request is already in flight: at most one
    /// request per session, and the triggering control is expected to be
    /// disabled until the current one settles.
    pub fn begin(&mut self) -> Option<RequestToken> {
        if self.is_loading() {
            debug!("Ignoring submit: a request is already in flight");
            return None;
        }
        self.generation += 1;
        self.state = SessionState::Loading;
        Some(RequestToken(self.generation))
    }

    /// Applies a successful payload if the token is still current.
    /// Returns false (and changes nothing) for a stale or duplicate
    /// completion.
    pub fn resolve(&mut self, token: RequestToken, payload: T) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.state = SessionState::Success(payload);
        true
    }

    /// Applies a failure message if the token is still current. The
    /// message is expected to be already human-readable (see the API
    /// layer's `detail` extraction), never a backtrace.
    pub fn reject(&mut self, token: RequestToken, message: impl Into<String>) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.state = SessionState::Error(message.into());
        true
    }

    pub fn payload(&self) -> Option<&T> {
        match &self.state {
            SessionState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Error(message) => Some(message),
            _ => None,
        }
    }

    fn accepts(&self, token: RequestToken) -> bool {
        if token.0 != self.generation || !self.is_loading() {
            debug!(
                "Ignoring completion for generation {} (current {})",
                token.0, self.generation
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_resolve_cycle() {
        let mut session: RequestSession<u32> = RequestSession::new();
        assert_eq!(*session.state(), SessionState::Idle);

        let token = session.begin().unwrap();
        assert!(session.is_loading());
        assert!(session.resolve(token, 7));
        assert_eq!(session.payload(), Some(&7));
    }

    #[test]
    fn test_submit_while_loading_is_rejected() {
        let mut session: RequestSession<u32> = RequestSession::new();
        let _token = session.begin().unwrap();
        assert!(session.begin().is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn test_reject_stores_message() {
        let mut session: RequestSession<u32> = RequestSession::new();
        let token = session.begin().unwrap();
        assert!(session.reject(token, "Cluster not found"));
        assert_eq!(session.error(), Some("Cluster not found"));
        assert!(session.payload().is_none());
    }

    #[test]
    fn test_stale_resolve_does_not_overwrite_newer_request() {
        let mut session: RequestSession<u32> = RequestSession::new();

        // First request fails.
        let first = session.begin().unwrap();
        assert!(session.reject(first, "timed out"));

        // Second request starts and succeeds.
        let second = session.begin().unwrap();
        assert!(session.resolve(second, 42));

        // The first request's response finally arrives; it must not win.
        assert!(!session.resolve(first, 1));
        assert_eq!(session.payload(), Some(&42));
    }

    #[test]
    fn test_stale_resolve_ignored_even_while_newer_request_loads() {
        let mut session: RequestSession<u32> = RequestSession::new();
        let first = session.begin().unwrap();
        assert!(session.reject(first, "network error"));

        let _second = session.begin().unwrap();
        // State is Loading again, but the old token's generation is stale.
        assert!(!session.resolve(first, 1));
        assert!(session.is_loading());
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let mut session: RequestSession<u32> = RequestSession::new();
        let token = session.begin().unwrap();
        assert!(session.resolve(token, 5));
        assert!(!session.reject(token, "late failure"));
        assert_eq!(session.payload(), Some(&5));
    }

    #[test]
    fn test_begin_after_settling_issues_fresh_generation() {
        let mut session: RequestSession<u32> = RequestSession::new();
        let first = session.begin().unwrap();
        assert!(session.resolve(first, 1));

        let second = session.begin().unwrap();
        assert_ne!(first, second);
        assert!(session.is_loading());
    }
}
