use crate::args::ConfigCommand;
use crate::context::ExecutionContext;
use crate::presentation::print_json;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Path => {
            println!("{}", ctx.config_path().display());
            Ok(())
        }
        ConfigCommand::Show => match ctx.format {
            OutputFormat::Json => print_json(&ctx.config),
            OutputFormat::Plain => {
                print!("{}", toml::to_string_pretty(&ctx.config)?);
                Ok(())
            }
        },
    }
}
