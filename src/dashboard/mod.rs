//! View state for the two-mode sentiment dashboard.
//!
//! [`DashboardState`] is a plain value with pure transitions; [`Dashboard`]
//! pairs it with a [`SentimentService`] and runs the effects transitions ask for.

mod effect;
mod state;

pub use effect::{AnalyzeRequest, Effect, NewsRequest, Outcome, execute};
pub use state::{Action, AnalysisState, DashboardState, NewsState, NewsView, ViewMode};

use crate::core::SentimentService;

/// Drives a [`DashboardState`] against a live service, one action at a time.
pub struct Dashboard<S> {
    service: S,
    state: DashboardState,
}

impl<S: SentimentService> Dashboard<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: DashboardState::default(),
        }
    }

    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Apply the synchronous part of `action` and return the network work it needs.
    ///
    /// Callers that want to render the loading state render between this and
    /// [`Dashboard::complete`].
    pub fn begin(&mut self, action: Action) -> Option<Effect> {
        let (next, effect) = std::mem::take(&mut self.state).reduce(action);
        self.state = next;
        effect
    }

    /// Run `effect` and fold its outcome into the state.
    pub async fn complete(&mut self, effect: Effect) -> &DashboardState {
        let outcome = execute(&self.service, effect).await;
        self.state = std::mem::take(&mut self.state).apply(outcome);
        &self.state
    }

    /// [`begin`](Self::begin) followed by [`complete`](Self::complete).
    pub async fn dispatch(&mut self, action: Action) -> &DashboardState {
        match self.begin(action) {
            Some(effect) => self.complete(effect).await,
            None => &self.state,
        }
    }
}
