use hourscope_types::SubredditSuggestion;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use crate::analysis::{AnalysisController, QueryState, Submission};
use crate::api::SubredditApi;
use crate::config::Config;
use crate::debounce::DEFAULT_QUIET_PERIOD;
use crate::search::{SearchCoordinator, SearchState};
use crate::validation::{ValidationPolicy, validate_submission};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub quiet_period: Duration,
    pub policy: ValidationPolicy,
    pub timezone: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
            policy: ValidationPolicy::default(),
            timezone: "UTC".to_string(),
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            quiet_period: config.quiet_period(),
            policy: config.validation,
            timezone: config.timezone.clone(),
        }
    }
}

/// Everything one interactive analyzer view owns.
///
/// Dropping the session cancels the pending debounce timer and aborts any
/// in-flight search or analysis; nothing resolves into a discarded session.
pub struct QuerySession<A: SubredditApi> {
    search: SearchCoordinator,
    analysis: AnalysisController<A>,
    policy: ValidationPolicy,
    typed: String,
    selected: Option<SubredditSuggestion>,
    timezone: String,
}

impl<A: SubredditApi> QuerySession<A> {
    pub fn new(api: Arc<A>, options: SessionOptions) -> Self {
        Self {
            search: SearchCoordinator::spawn(Arc::clone(&api), options.quiet_period),
            analysis: AnalysisController::new(api),
            policy: options.policy,
            typed: String::new(),
            selected: None,
            timezone: options.timezone,
        }
    }

    /// The input box changed.
    ///
    /// Editing away from the selected name drops the selection.
    pub fn type_text(&mut self, text: &str) {
        if self
            .selected
            .as_ref()
            .is_some_and(|s| s.name != text.trim())
        {
            debug!("input changed; clearing selection");
            self.selected = None;
        }
        self.typed = text.to_string();
        self.search.input(text);
    }

    /// Pick a suggestion. The input box takes the suggestion's name.
    pub fn select(&mut self, suggestion: SubredditSuggestion) {
        self.typed = suggestion.name.clone();
        self.selected = Some(suggestion);
    }

    /// Pick the suggestion at `index` of the current list.
    pub fn select_index(&mut self, index: usize) -> Option<&SubredditSuggestion> {
        let suggestion = self.search.suggestions().into_iter().nth(index)?;
        self.select(suggestion);
        self.selected.as_ref()
    }

    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.timezone = timezone.into();
    }

    /// The "Analyze" action: validate, then submit.
    pub fn analyze(&self) -> Submission {
        if !self.analysis.begin_validation() {
            debug!("analysis already loading; ignoring submit");
            return Submission::AlreadyLoading;
        }

        match validate_submission(self.policy, self.selected.as_ref(), &self.typed) {
            Ok(name) => self.analysis.submit(name, self.timezone.clone()),
            Err(err) => {
                debug!("submission rejected: {}", err);
                self.analysis.reject(err.message());
                Submission::Rejected(err)
            }
        }
    }

    /// Combined state. `searching` is reported only while the analysis side
    /// has nothing of its own to show.
    pub fn state(&self) -> QueryState {
        match self.analysis.state() {
            QueryState::Idle if self.search.is_searching() => QueryState::Searching,
            other => other,
        }
    }

    pub fn search_state(&self) -> SearchState {
        self.search.snapshot()
    }

    pub fn suggestions(&self) -> Vec<SubredditSuggestion> {
        self.search.suggestions()
    }

    pub fn selected(&self) -> Option<&SubredditSuggestion> {
        self.selected.as_ref()
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn dismiss_error(&self) {
        self.analysis.dismiss_error();
    }

    pub fn search(&self) -> &SearchCoordinator {
        &self.search
    }

    pub fn analysis(&self) -> &AnalysisController<A> {
        &self.analysis
    }
}
