use futures::stream::{self, Stream};
use hourscope_types::{SubredditSuggestion, partition_valid};
use log::{debug, warn};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};

use crate::api::SubredditApi;
use crate::debounce::Debouncer;
use crate::generation::Generation;

/// Observable state of the autocomplete box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Raw text as last typed
    pub query: String,
    /// Suggestions of the most recent authoritative response, server order
    pub suggestions: Vec<SubredditSuggestion>,
    /// A search request is in flight
    pub searching: bool,
    /// Notice from the last failed search
    pub error: Option<String>,
    #[serde(skip)]
    input_seq: u64,
    #[serde(skip)]
    dispatched_seq: u64,
}

impl SearchState {
    /// Typed text is still waiting out the quiet period.
    pub fn is_pending(&self) -> bool {
        self.input_seq != self.dispatched_seq
    }

    /// Nothing is waiting to be sent and nothing is in flight.
    pub fn is_settled(&self) -> bool {
        !self.is_pending() && !self.searching
    }
}

/// Turns raw keystrokes into debounced suggestion fetches.
///
/// Every issued request takes a fresh [`Generation`] token. Responses whose
/// token is no longer current are dropped, so a slow early request can
/// never overwrite the result of a later one.
pub struct SearchCoordinator {
    debouncer: Debouncer<(u64, String)>,
    state: Arc<watch::Sender<SearchState>>,
    generation: Generation,
    driver: JoinHandle<()>,
}

impl SearchCoordinator {
    /// Spawn the coordinator on the current tokio runtime.
    pub fn spawn<A: SubredditApi>(api: Arc<A>, quiet_period: Duration) -> Self {
        let (debouncer, debounced) = Debouncer::new(quiet_period);
        let (state, _) = watch::channel(SearchState::default());
        let state = Arc::new(state);
        let generation = Generation::new();

        let driver = tokio::spawn(drive(
            api,
            debounced,
            Arc::clone(&state),
            generation.clone(),
        ));

        Self {
            debouncer,
            state,
            generation,
            driver,
        }
    }

    /// Feed the current contents of the input box.
    ///
    /// Blank text clears the suggestions right away, cancels any pending
    /// debounce, and retires the in-flight request without a network call.
    pub fn input(&self, text: &str) {
        if text.trim().is_empty() {
            self.debouncer.cancel();
            self.state.send_modify(|s| {
                self.generation.invalidate();
                s.input_seq += 1;
                s.dispatched_seq = s.input_seq;
                s.query = text.to_string();
                s.suggestions.clear();
                s.searching = false;
                s.error = None;
            });
            return;
        }

        let mut seq = 0;
        self.state.send_modify(|s| {
            s.input_seq += 1;
            seq = s.input_seq;
            s.query = text.to_string();
        });
        self.debouncer.push((seq, text.to_string()));
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn suggestions(&self) -> Vec<SubredditSuggestion> {
        self.state.borrow().suggestions.clone()
    }

    pub fn is_searching(&self) -> bool {
        self.state.borrow().searching
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Every state change from now on. Ends when the coordinator is dropped.
    pub fn updates(&self) -> impl Stream<Item = SearchState> + Send + 'static {
        stream::unfold(self.state.subscribe(), |mut rx| async move {
            rx.changed().await.ok()?;
            let next = rx.borrow_and_update().clone();
            Some((next, rx))
        })
    }

    /// Wait until typed text has been searched and the response applied.
    pub async fn settled(&self) -> SearchState {
        let mut rx = self.state.subscribe();
        match rx.wait_for(SearchState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.snapshot(),
        }
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        self.generation.invalidate();
        // Aborting the driver drops its JoinSet, which aborts in-flight requests.
        self.driver.abort();
    }
}

async fn drive<A: SubredditApi>(
    api: Arc<A>,
    mut debounced: mpsc::UnboundedReceiver<(u64, String)>,
    state: Arc<watch::Sender<SearchState>>,
    generation: Generation,
) {
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            next = debounced.recv() => {
                let Some((seq, text)) = next else { break };

                let mut issued = None;
                state.send_if_modified(|s| {
                    // Newer input arrived after the debouncer emitted this one.
                    if seq != s.input_seq {
                        return false;
                    }
                    s.dispatched_seq = seq;
                    s.searching = true;
                    issued = Some(generation.issue());
                    true
                });
                let Some(token) = issued else { continue };

                let query = text.trim().to_string();
                debug!("search #{} for {:?}", token.id(), query);

                let api = Arc::clone(&api);
                let state = Arc::clone(&state);
                in_flight.spawn(async move {
                    let outcome = api.search(&query).await;
                    state.send_if_modified(|s| {
                        if !token.is_current() {
                            debug!("discarding stale search #{} for {:?}", token.id(), query);
                            return false;
                        }
                        s.searching = false;
                        match outcome {
                            Ok(results) => {
                                let (valid, dropped) = partition_valid(results);
                                if !dropped.is_empty() {
                                    warn!(
                                        "dropped {} suggestion(s) with invalid names for {:?}",
                                        dropped.len(),
                                        query
                                    );
                                }
                                s.suggestions = valid;
                                s.error = None;
                            }
                            Err(err) => {
                                warn!("search for {:?} failed: {}", query, err);
                                s.suggestions.clear();
                                s.error = Some(err.user_message());
                            }
                        }
                        true
                    });
                });
            }
            Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
        }
    }
}
