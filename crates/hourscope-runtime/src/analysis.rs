use hourscope_engine::verify_result;
use hourscope_types::{AnalysisResult, SubredditName};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::api::SubredditApi;
use crate::generation::Generation;

/// Shown when the server returns a histogram that breaks its own invariants.
pub const MALFORMED_RESULT_MESSAGE: &str = "Received malformed analysis data.";

/// Presentation state of one query session.
///
/// `Success` and `Error` are mutually exclusive by construction: entering
/// either one replaces the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "payload", rename_all = "lowercase")]
pub enum QueryState {
    #[default]
    Idle,
    Searching,
    Validating,
    Loading,
    Success(AnalysisResult),
    Error(String),
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            QueryState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Outcome of a submit.
#[derive(Debug)]
pub enum Submission {
    /// Request sent; the ticket resolves once its outcome is applied
    Started(AnalysisTicket),
    /// A request was already loading; nothing was sent
    AlreadyLoading,
    /// Rejected locally; nothing was sent
    Rejected(crate::validation::ValidationError),
}

impl Submission {
    pub fn is_started(&self) -> bool {
        matches!(self, Submission::Started(_))
    }
}

/// Handle to a started analysis request.
#[derive(Debug)]
pub struct AnalysisTicket {
    handle: JoinHandle<()>,
    state: watch::Receiver<QueryState>,
}

impl AnalysisTicket {
    /// Wait for the request to finish and return the state it left behind.
    ///
    /// If the controller was torn down first, returns the last state seen.
    pub async fn settled(mut self) -> QueryState {
        let _ = (&mut self.handle).await;
        self.state.borrow_and_update().clone()
    }
}

/// Issues analysis requests, at most one at a time.
///
/// `idle → loading → success | error → idle`. A submit while loading is
/// ignored rather than queued.
pub struct AnalysisController<A> {
    api: Arc<A>,
    state: Arc<watch::Sender<QueryState>>,
    generation: Generation,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl<A: SubredditApi> AnalysisController<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(QueryState::Idle);
        Self {
            api,
            state: Arc::new(state),
            generation: Generation::new(),
            in_flight: Mutex::new(None),
        }
    }

    pub fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    /// Enter `validating` unless a request is loading.
    ///
    /// Returns `false` when the submit must be dropped.
    pub fn begin_validation(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = QueryState::Validating;
            true
        })
    }

    /// Record a local validation failure; the network is never contacted.
    pub fn reject(&self, message: &str) {
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = QueryState::Error(message.to_string());
            true
        });
    }

    /// Start an analysis request for a validated subreddit.
    ///
    /// The previous result or error is cleared before the request is sent.
    pub fn submit(&self, subreddit: SubredditName, timezone: impl Into<String>) -> Submission {
        let mut issued = None;
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = QueryState::Loading;
            issued = Some(self.generation.issue());
            true
        });
        let Some(token) = issued else {
            debug!("analysis already loading; ignoring submit for r/{}", subreddit);
            return Submission::AlreadyLoading;
        };

        let timezone = timezone.into();
        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        info!("analyzing r/{} in {}", subreddit, timezone);

        let handle = tokio::spawn(async move {
            let next = match api.analyze(&subreddit, &timezone).await {
                Ok(result) => {
                    let violations = verify_result(&result);
                    if violations.is_empty() {
                        QueryState::Success(result)
                    } else {
                        for violation in &violations {
                            warn!("analysis of r/{}: {}", subreddit, violation);
                        }
                        QueryState::Error(MALFORMED_RESULT_MESSAGE.to_string())
                    }
                }
                Err(err) => {
                    warn!("analysis of r/{} failed: {}", subreddit, err);
                    QueryState::Error(err.user_message())
                }
            };

            state.send_if_modified(|s| {
                if !token.is_current() {
                    debug!("dropping analysis of r/{} after teardown", subreddit);
                    return false;
                }
                *s = next;
                true
            });
        });

        if let Ok(mut slot) = self.in_flight.lock() {
            *slot = Some(handle.abort_handle());
        }

        Submission::Started(AnalysisTicket {
            handle,
            state: self.state.subscribe(),
        })
    }

    /// Close the error notice: `error → idle`.
    pub fn dismiss_error(&self) {
        self.state.send_if_modified(|state| {
            if matches!(state, QueryState::Error(_)) {
                *state = QueryState::Idle;
                return true;
            }
            false
        });
    }

    /// Return to `idle` from any settled state.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| {
            if state.is_loading() || matches!(state, QueryState::Idle) {
                return false;
            }
            *state = QueryState::Idle;
            true
        });
    }
}

impl<A> Drop for AnalysisController<A> {
    fn drop(&mut self) {
        self.generation.invalidate();
        if let Ok(mut slot) = self.in_flight.lock()
            && let Some(handle) = slot.take()
        {
            handle.abort();
        }
    }
}
