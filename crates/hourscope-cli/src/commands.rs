use super::args::{Cli, Commands, ConfigCommand, ThemeCommand};
use super::context::ExecutionContext;
use super::handlers;
use anyhow::Result;
use hourscope_runtime::Config;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let ctx = ExecutionContext::new(config, config_path, cli.format);

    match cli.command {
        Commands::Search { query } => handlers::search::handle(&ctx, &query),

        Commands::Analyze {
            subreddit,
            timezone,
        } => handlers::analyze::handle(&ctx, &subreddit, timezone),

        Commands::Interactive { timezone } => handlers::interactive::handle(&ctx, timezone),

        Commands::Theme { command } => {
            handlers::theme::handle(ctx, command.unwrap_or(ThemeCommand::Show))
        }

        Commands::Config { command } => {
            handlers::config::handle(&ctx, command.unwrap_or(ConfigCommand::Show))
        }
    }
}
