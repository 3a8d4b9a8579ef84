//! Request lifecycle for a single checker instance

use crate::client::{check, DetectionClient};
use crate::{CoreResult, DetectionResult, ErrorKind, Verdict};
use parking_lot::Mutex;
use serde::Serialize;

/// What the checker is currently showing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(DetectionResult),
    Failed(String),
}

impl RequestState {
    /// Collapse the outcome of a check into the state shown to the user.
    ///
    /// Errors are reduced to their user-facing copy; transport detail is
    /// logged here and goes no further.
    pub fn settle(outcome: CoreResult<DetectionResult>) -> Self {
        match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(e) => {
                if e.kind() == ErrorKind::Transport {
                    tracing::warn!("Detection request failed: {}", e);
                }
                RequestState::Failed(e.user_message())
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.result().cloned().map(Verdict::new)
    }
}

/// Run one check, reporting every state transition to `on_state`.
///
/// Blank text yields a single `Failed` transition and no request. Anything
/// else yields `Loading` followed by the settled state. The settled state is
/// also returned.
pub async fn submit_with<C, F>(client: &C, text: &str, mut on_state: F) -> RequestState
where
    C: DetectionClient + ?Sized,
    F: FnMut(RequestState),
{
    if !text.trim().is_empty() {
        on_state(RequestState::Loading);
        tracing::debug!("Submitting {} bytes for detection", text.len());
    }

    let settled = RequestState::settle(check(client, text).await);

    if let RequestState::Succeeded(result) = &settled {
        tracing::info!(
            "Detection complete: {} ({})",
            result.tier(),
            result.confidence_label()
        );
    }

    on_state(settled.clone());
    settled
}

/// Drives detection requests and owns the resulting [`RequestState`].
///
/// The state lock is never held across the network call. Two overlapping
/// `submit` calls are therefore not serialized: whichever request settles
/// last overwrites the other. Callers that want single-flight behaviour
/// should refuse to submit while [`Orchestrator::is_loading`] is true.
pub struct Orchestrator<C> {
    client: C,
    state: Mutex<RequestState>,
}

impl<C: DetectionClient> Orchestrator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(RequestState::Idle),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState {
        self.state.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading()
    }

    /// Discard whatever is displayed
    pub fn reset(&self) {
        *self.state.lock() = RequestState::Idle;
    }

    /// Check `text` and return the state it settled into.
    ///
    /// Blank text fails immediately without touching the network. The
    /// returned state is never [`RequestState::Loading`].
    pub async fn submit(&self, text: &str) -> RequestState {
        submit_with(&self.client, text, |state| *self.state.lock() = state).await
    }
}
