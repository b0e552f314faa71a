// Request Lifecycle
// State machine for a single analysis session: Idle -> Loading -> Success or
// Error, re-entrant for the life of the session

use crate::models::AnalysisResult;
use tracing::{debug, warn};

/// Session-wide status of the current analysis request. Holds at most one
/// result or one error message, never both.
#[derive(Debug, Clone, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Owns the one mutable piece of session state. All transitions go through
/// the methods below; there is no other mutation path.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    state: RequestState,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Attempt to start a new request. Returns true when the submission was
    /// accepted and the session moved to Loading, discarding any prior
    /// result or error. Blank text and an in-flight request both suppress
    /// the submission; neither is an error.
    pub fn submit(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            debug!("submission suppressed: blank text");
            return false;
        }
        if self.state.is_loading() {
            warn!("submission suppressed: request already in flight");
            return false;
        }
        self.state = RequestState::Loading;
        true
    }

    /// Resolve the in-flight request with a service result. A resolution
    /// arriving outside Loading has nothing to resolve and is ignored.
    pub fn resolve_ok(&mut self, result: AnalysisResult) {
        if !self.state.is_loading() {
            warn!("response dropped: no request in flight");
            return;
        }
        self.state = RequestState::Success(result);
    }

    /// Resolve the in-flight request with a failure message.
    pub fn resolve_err(&mut self, message: impl Into<String>) {
        if !self.state.is_loading() {
            warn!("failure dropped: no request in flight");
            return;
        }
        self.state = RequestState::Error(message.into());
    }
}
