use crate::context::ExecutionContext;
use crate::presentation::{SuggestionListView, print_json};
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use hourscope_runtime::SearchCoordinator;
use std::time::Duration;

pub fn handle(ctx: &ExecutionContext, query: &str) -> Result<()> {
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let state = runtime.block_on(async {
        // One-shot: nothing to coalesce, so no quiet period.
        let search = SearchCoordinator::spawn(api, Duration::ZERO);
        search.input(query);
        search.settled().await
    });

    if let Some(message) = state.error {
        bail!(message);
    }

    match ctx.format {
        OutputFormat::Json => print_json(&state.suggestions),
        OutputFormat::Plain => {
            let options = ctx.display_options();
            let view = SuggestionListView {
                suggestions: &state.suggestions,
                options: &options,
            };
            print!("{}", view);
            Ok(())
        }
    }
}
