//! Testing infrastructure for hourscope orchestration tests.
//!
//! - `FakeApi`: scripted [`SubredditApi`](hourscope_runtime::SubredditApi)
//!   with immediate, delayed, and gated replies plus call recording
//! - `fixtures`: sample histograms, results, and suggestion lists

pub mod fake_api;
pub mod fixtures;

pub use fake_api::{FakeApi, Gate};
