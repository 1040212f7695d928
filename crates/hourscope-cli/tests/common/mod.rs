#![allow(dead_code)]

use assert_cmd::Command;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use hourscope_testing::fixtures::{result_with_previous, sample_result};
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// The binary, pointed at this fixture's config file.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("hourscope").unwrap();
        cmd.arg("--config").arg(self.config_path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Same binary as a plain process, for tests that feed stdin over time.
    #[allow(deprecated)]
    pub fn process(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("hourscope"));
        cmd.arg("--config").arg(self.config_path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).unwrap();
    }
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("q").map(String::as_str) {
        Some("boom") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some(_) => Json(json!({
            "results": [
                { "name": "rust", "title": "Rust" },
                { "name": "r", "title": "too short to keep" },
                { "name": "rust_gamedev", "title": "Rust Gamedev" }
            ]
        }))
        .into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn analysis(
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let timezone = params
        .get("timezone")
        .cloned()
        .unwrap_or_else(|| "UTC".to_string());
    match name.as_str() {
        "nosuchsub" => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Subreddit not found." })),
        )
            .into_response(),
        "lopsided" => Json(json!({
            "subreddit": name,
            "timezone": timezone,
            "hourly_post_counts": [1, 2, 3],
            "optimal_hours": [2],
            "max_post_count": 3
        }))
        .into_response(),
        "trending" => Json(result_with_previous(&name, &timezone, 10)).into_response(),
        _ => Json(sample_result(&name, &timezone)).into_response(),
    }
}

/// Serve a canned API on a background thread; returns its base URL.
pub fn spawn_stub_api() -> String {
    let (addr_tx, addr_rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let app = Router::new()
                .route("/api/subreddit/search", get(search))
                .route("/api/subreddit/:name/analysis", get(analysis));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            addr_tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}/api", addr_rx.recv().unwrap())
}
