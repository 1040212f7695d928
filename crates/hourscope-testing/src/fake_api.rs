use hourscope_runtime::{ApiError, ApiResult, SubredditApi};
use hourscope_types::{AnalysisResult, SubredditName, SubredditSuggestion};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::oneshot;

enum Reply<T> {
    Ready(ApiResult<T>),
    Delayed(Duration, ApiResult<T>),
    Gated(oneshot::Receiver<ApiResult<T>>),
}

/// Sender half of a gated reply; the fake call blocks until `resolve`.
pub struct Gate<T> {
    tx: oneshot::Sender<ApiResult<T>>,
}

impl<T> Gate<T> {
    /// Release the waiting call. Returns false if nobody is waiting any more
    /// (the request was aborted).
    pub fn resolve(self, reply: ApiResult<T>) -> bool {
        self.tx.send(reply).is_ok()
    }
}

#[derive(Default)]
struct Script {
    search: HashMap<String, VecDeque<Reply<Vec<SubredditSuggestion>>>>,
    analyze: VecDeque<Reply<AnalysisResult>>,
    search_calls: Vec<String>,
    analyze_calls: Vec<(String, String)>,
}

/// In-memory [`SubredditApi`] driven by per-call scripts.
///
/// Unscripted searches return no suggestions; unscripted analyses fail with
/// a bodyless HTTP 500.
#[derive(Default)]
pub struct FakeApi {
    script: Mutex<Script>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push_search(&self, query: &str, reply: Reply<Vec<SubredditSuggestion>>) {
        self.lock()
            .search
            .entry(query.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn respond_search(&self, query: &str, reply: ApiResult<Vec<SubredditSuggestion>>) {
        self.push_search(query, Reply::Ready(reply));
    }

    pub fn respond_search_after(
        &self,
        query: &str,
        latency: Duration,
        reply: ApiResult<Vec<SubredditSuggestion>>,
    ) {
        self.push_search(query, Reply::Delayed(latency, reply));
    }

    pub fn gate_search(&self, query: &str) -> Gate<Vec<SubredditSuggestion>> {
        let (tx, rx) = oneshot::channel();
        self.push_search(query, Reply::Gated(rx));
        Gate { tx }
    }

    pub fn respond_analysis(&self, reply: ApiResult<AnalysisResult>) {
        self.lock().analyze.push_back(Reply::Ready(reply));
    }

    pub fn respond_analysis_after(&self, latency: Duration, reply: ApiResult<AnalysisResult>) {
        self.lock().analyze.push_back(Reply::Delayed(latency, reply));
    }

    pub fn gate_analysis(&self) -> Gate<AnalysisResult> {
        let (tx, rx) = oneshot::channel();
        self.lock().analyze.push_back(Reply::Gated(rx));
        Gate { tx }
    }

    /// Queries in the order they reached the fake.
    pub fn search_calls(&self) -> Vec<String> {
        self.lock().search_calls.clone()
    }

    /// `(subreddit, timezone)` pairs in call order.
    pub fn analyze_calls(&self) -> Vec<(String, String)> {
        self.lock().analyze_calls.clone()
    }
}

async fn settle<T>(reply: Option<Reply<T>>, unscripted: ApiResult<T>) -> ApiResult<T> {
    match reply {
        None => unscripted,
        Some(Reply::Ready(result)) => result,
        Some(Reply::Delayed(latency, result)) => {
            tokio::time::sleep(latency).await;
            result
        }
        Some(Reply::Gated(rx)) => rx
            .await
            .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string()))),
    }
}

impl SubredditApi for FakeApi {
    async fn search(&self, query: &str) -> ApiResult<Vec<SubredditSuggestion>> {
        let reply = {
            let mut script = self.lock();
            script.search_calls.push(query.to_string());
            script.search.get_mut(query).and_then(VecDeque::pop_front)
        };
        settle(reply, Ok(Vec::new())).await
    }

    async fn analyze(
        &self,
        subreddit: &SubredditName,
        timezone: &str,
    ) -> ApiResult<AnalysisResult> {
        let reply = {
            let mut script = self.lock();
            script
                .analyze_calls
                .push((subreddit.to_string(), timezone.to_string()));
            script.analyze.pop_front()
        };
        settle(
            reply,
            Err(ApiError::Status {
                status: 500,
                message: None,
            }),
        )
        .await
    }
}
