use crate::cli::commands::prompt_password;
use crate::cli::parser::Commands;
use crate::core::session::{LoginOutcome, SessionController};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::AppContext;

/// Handle the `login` subcommand.
pub async fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => prompt_password("Password")?,
        };

        let mut controller = SessionController::new(&ctx.api, &mut ctx.store);
        match controller.login(username, &password).await? {
            LoginOutcome::Authenticated => {
                messages::success(format!("Logged in as {}.", username));
            }
            LoginOutcome::MustChangePassword => {
                messages::warning("Login accepted, but the default password is still in use.");
                messages::info("Run `enturno passwd` to set a new password before clocking in.");
            }
        }
    }
    Ok(())
}
