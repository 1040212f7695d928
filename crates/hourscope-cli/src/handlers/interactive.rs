use crate::context::ExecutionContext;
use crate::presentation::SuggestionListView;
use anyhow::Result;
use futures::StreamExt;
use hourscope_runtime::{HttpApi, QuerySession, QueryState, SessionOptions, Submission};
use log::debug;
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

use super::analyze::render;

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// New contents of the search box
    Text(String),
    /// 1-based index into the current suggestions
    Pick(usize),
    Timezone(String),
    Go,
    Quit,
    Unknown(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Input::Text(line.to_string());
        };
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit" | "q"), None) => Input::Quit,
            (Some("go"), None) => Input::Go,
            (Some("pick"), Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Input::Pick(n),
                _ => Input::Unknown(line.trim().to_string()),
            },
            (Some("tz"), Some(zone)) => Input::Timezone(zone.to_string()),
            _ => Input::Unknown(line.trim().to_string()),
        }
    }
}

pub fn handle(ctx: &ExecutionContext, timezone: Option<String>) -> Result<()> {
    let api = ctx.api()?;
    let mut options = SessionOptions::from(&ctx.config);
    options.timezone = ctx.timezone_or_default(timezone);

    let runtime = ctx.runtime()?;
    runtime.block_on(run_session(ctx, api, options))
}

async fn run_session(
    ctx: &ExecutionContext,
    api: Arc<HttpApi>,
    options: SessionOptions,
) -> Result<()> {
    let (line_tx, mut lines) = mpsc::unbounded_channel();
    // stdin has no async reader here; a plain thread feeds lines in.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut session = QuerySession::new(api, options);
    let updates = session.search().updates();
    tokio::pin!(updates);
    let mut analysis = session.analysis().subscribe();
    let display = ctx.display_options();

    println!("Type to search. :pick <n>, :tz <zone>, :go, :quit");

    let mut stdin_open = true;
    loop {
        tokio::select! {
            line = lines.recv(), if stdin_open => {
                let Some(line) = line else {
                    // End of input still lets a running analysis report.
                    stdin_open = false;
                    if !analysis_pending(&session, &analysis) {
                        break;
                    }
                    debug!("stdin closed; waiting for the running analysis");
                    continue;
                };
                match Input::parse(&line) {
                    Input::Quit => break,
                    Input::Text(text) => session.type_text(&text),
                    Input::Pick(n) => match session.select_index(n - 1) {
                        Some(selected) => println!("Selected r/{}", selected.name),
                        None => println!("No suggestion #{}", n),
                    },
                    Input::Timezone(zone) => {
                        session.set_timezone(zone);
                        println!("Timezone: {}", session.timezone());
                    }
                    // Rejections surface through the analysis state below.
                    Input::Go => match session.analyze() {
                        Submission::Started(_) => println!("Analyzing..."),
                        Submission::AlreadyLoading => println!("An analysis is already running."),
                        Submission::Rejected(err) => debug!("rejected: {}", err),
                    },
                    Input::Unknown(command) => println!("Unknown command: {}", command),
                }
            }
            Some(state) = updates.next() => {
                if !state.is_settled() || state.query.trim().is_empty() {
                    continue;
                }
                match &state.error {
                    Some(message) => println!("{}", message),
                    None => print!(
                        "{}",
                        SuggestionListView {
                            suggestions: &state.suggestions,
                            options: &display,
                        }
                    ),
                }
            }
            Ok(()) = analysis.changed() => {
                let state = analysis.borrow_and_update().clone();
                match state {
                    QueryState::Success(result) => render(ctx, &result)?,
                    QueryState::Error(message) => {
                        println!("{}", message);
                        session.dismiss_error();
                    }
                    _ => {}
                }
                if !stdin_open && !analysis_pending(&session, &analysis) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// An analysis is running, or its last state change has not been shown yet.
fn analysis_pending(
    session: &QuerySession<HttpApi>,
    analysis: &watch::Receiver<QueryState>,
) -> bool {
    matches!(
        session.analysis().state(),
        QueryState::Loading | QueryState::Validating
    ) || analysis.has_changed().unwrap_or(false)
}
