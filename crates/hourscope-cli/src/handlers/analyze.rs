use crate::context::ExecutionContext;
use crate::presentation::{ReportView, present_report, print_json};
use crate::types::OutputFormat;
use anyhow::{Result, anyhow, bail};
use hourscope_runtime::{
    AnalysisController, QueryState, Submission, ValidationPolicy, validate_submission,
};
use hourscope_types::AnalysisResult;

pub fn handle(ctx: &ExecutionContext, subreddit: &str, timezone: Option<String>) -> Result<()> {
    // A name on the command line is typed text; there is no suggestion list
    // to pick from, so it must pass the name pattern instead.
    let name = validate_submission(ValidationPolicy::SelectionOrPattern, None, subreddit)
        .map_err(|err| anyhow!(err.message()))?;
    let timezone = ctx.timezone_or_default(timezone);

    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let state = runtime.block_on(async {
        let controller = AnalysisController::new(api);
        match controller.submit(name, timezone) {
            Submission::Started(ticket) => ticket.settled().await,
            _ => controller.state(),
        }
    });

    match state {
        QueryState::Success(result) => render(ctx, &result),
        QueryState::Error(message) => bail!(message),
        other => bail!("analysis did not finish (state: {:?})", other),
    }
}

pub(crate) fn render(ctx: &ExecutionContext, result: &AnalysisResult) -> Result<()> {
    let report = present_report(result);
    match ctx.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Plain => {
            let options = ctx.display_options();
            print!("{}", ReportView::new(&report, &options));
            Ok(())
        }
    }
}
