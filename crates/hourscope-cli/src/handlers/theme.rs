use crate::args::ThemeCommand;
use crate::context::ExecutionContext;
use anyhow::Result;
use hourscope_types::ThemePreference;

pub fn handle(mut ctx: ExecutionContext, command: ThemeCommand) -> Result<()> {
    let next = match command {
        ThemeCommand::Show => {
            println!("{}", ctx.config.theme);
            return Ok(());
        }
        ThemeCommand::Set { theme } => theme.parse::<ThemePreference>()?,
        ThemeCommand::Toggle => ctx.config.theme.toggled(),
    };

    ctx.config.theme = next;
    ctx.config.save_to(ctx.config_path())?;
    println!("{}", next);
    Ok(())
}
