use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::AppContext;

/// Handle the `config` subcommand.
pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Config { init, print_config } = cmd {
        // ---- INIT ----
        if *init {
            ctx.cfg.save(&ctx.dir)?;
            messages::success(format!("Config file: {:?}", Config::config_file(&ctx.dir)));
        }

        // ---- PRINT ----
        if *print_config {
            let yaml =
                serde_yaml::to_string(&ctx.cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }
    }
    Ok(())
}
