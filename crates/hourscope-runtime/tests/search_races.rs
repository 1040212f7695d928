use futures::StreamExt;
use hourscope_runtime::{ApiError, GENERIC_ERROR_MESSAGE, SearchCoordinator};
use hourscope_testing::FakeApi;
use hourscope_testing::fixtures::suggestions;
use hourscope_types::SubredditSuggestion;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

const QUIET: Duration = Duration::from_millis(500);

fn names(list: &[SubredditSuggestion]) -> Vec<&str> {
    list.iter().map(|s| s.name.as_str()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_slow_stale_response_never_overwrites_newer_one() {
    let api = Arc::new(FakeApi::new());
    api.respond_search_after(
        "rus",
        Duration::from_secs(2),
        Ok(suggestions(&[("rust_slow", "Stale")])),
    );
    api.respond_search_after(
        "rust",
        Duration::from_millis(100),
        Ok(suggestions(&[("rust", "Rust")])),
    );
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    // R1 goes out at 500ms and resolves at 2500ms.
    search.input("rus");
    sleep(Duration::from_millis(650)).await;
    assert!(search.is_searching());

    // R2 goes out at 1150ms and resolves at 1250ms.
    search.input("rust");
    sleep(Duration::from_millis(700)).await;
    let state = search.snapshot();
    assert_eq!(names(&state.suggestions), vec!["rust"]);
    assert!(!state.searching);

    // R1 resolves last and must be ignored.
    sleep(Duration::from_secs(2)).await;
    let state = search.snapshot();
    assert_eq!(names(&state.suggestions), vec!["rust"]);
    assert!(!state.searching);

    assert_eq!(api.search_calls(), vec!["rus", "rust"]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_does_not_overwrite_newer_empty_list() {
    let api = Arc::new(FakeApi::new());
    api.respond_search_after(
        "python",
        Duration::from_secs(3),
        Ok(suggestions(&[("Python", "Python")])),
    );
    api.respond_search("pythonzzz", Ok(Vec::new()));
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    search.input("python");
    sleep(Duration::from_millis(600)).await;
    search.input("pythonzzz");
    let state = search.settled().await;
    assert!(state.suggestions.is_empty());

    sleep(Duration::from_secs(4)).await;
    assert!(search.suggestions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_typing_burst_issues_one_search() {
    let api = Arc::new(FakeApi::new());
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    for text in ["r", "ru", "rus", "rust"] {
        search.input(text);
        sleep(Duration::from_millis(100)).await;
    }
    search.settled().await;

    assert_eq!(api.search_calls(), vec!["rust"]);
}

#[tokio::test(start_paused = true)]
async fn test_query_is_trimmed() {
    let api = Arc::new(FakeApi::new());
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    search.input("  rust  ");
    let state = search.settled().await;

    assert_eq!(state.query, "  rust  ");
    assert_eq!(api.search_calls(), vec!["rust"]);
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_clears_without_network() {
    let api = Arc::new(FakeApi::new());
    api.respond_search("rust", Ok(suggestions(&[("rust", "Rust")])));
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    search.input("rust");
    assert_eq!(search.settled().await.suggestions.len(), 1);

    search.input("   ");
    let state = search.snapshot();
    assert!(state.suggestions.is_empty());
    assert!(!state.searching);
    assert!(state.is_settled());

    sleep(Duration::from_secs(2)).await;
    assert_eq!(api.search_calls(), vec!["rust"]);
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_cancels_pending_debounce() {
    let api = Arc::new(FakeApi::new());
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    search.input("rust");
    sleep(Duration::from_millis(200)).await;
    search.input("");
    sleep(Duration::from_secs(2)).await;

    assert!(api.search_calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_retires_in_flight_search() {
    let api = Arc::new(FakeApi::new());
    let gate = api.gate_search("rust");
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    search.input("rust");
    sleep(Duration::from_millis(600)).await;
    assert!(search.is_searching());

    search.input("");
    assert!(!search.is_searching());
    assert!(gate.resolve(Ok(suggestions(&[("rust", "Rust")]))));

    sleep(Duration::from_millis(50)).await;
    assert!(search.suggestions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failure_surfaces_message_and_typing_recovers() {
    let api = Arc::new(FakeApi::new());
    api.respond_search("rust", Ok(suggestions(&[("rust", "Rust")])));
    api.respond_search(
        "rustt",
        Err(ApiError::Status {
            status: 500,
            message: Some("Reddit API error: 503".to_string()),
        }),
    );
    api.respond_search("rusty", Err(ApiError::Transport("connection reset".to_string())));
    api.respond_search("rust", Ok(suggestions(&[("rust", "Rust")])));
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    search.input("rust");
    assert_eq!(search.settled().await.suggestions.len(), 1);

    search.input("rustt");
    let state = search.settled().await;
    assert_eq!(state.error.as_deref(), Some("Reddit API error: 503"));
    assert!(state.suggestions.is_empty());

    search.input("rusty");
    let state = search.settled().await;
    assert_eq!(state.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));

    search.input("rust");
    let state = search.settled().await;
    assert_eq!(state.error, None);
    assert_eq!(names(&state.suggestions), vec!["rust"]);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_suggestions_are_dropped_in_server_order() {
    let api = Arc::new(FakeApi::new());
    api.respond_search(
        "game",
        Ok(suggestions(&[
            ("gamedev", "Game Development"),
            ("gg", "too short"),
            ("pc gaming", "has a space"),
            ("Games", "Games"),
        ])),
    );
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    search.input("game");
    let state = search.settled().await;

    assert_eq!(names(&state.suggestions), vec!["gamedev", "Games"]);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_search() {
    let api = Arc::new(FakeApi::new());
    let search = SearchCoordinator::spawn(api.clone(), QUIET);

    search.input("rust");
    drop(search);
    sleep(Duration::from_secs(2)).await;

    assert!(api.search_calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_updates_stream_reports_searching_then_results() {
    let api = Arc::new(FakeApi::new());
    api.respond_search_after(
        "rust",
        Duration::from_millis(200),
        Ok(suggestions(&[("rust", "Rust")])),
    );
    let search = SearchCoordinator::spawn(api.clone(), QUIET);
    let mut updates = Box::pin(search.updates());

    search.input("rust");

    let mut saw_searching = false;
    while let Some(state) = updates.next().await {
        saw_searching |= state.searching;
        if state.is_settled() {
            assert_eq!(names(&state.suggestions), vec!["rust"]);
            break;
        }
    }
    assert!(saw_searching);
}
