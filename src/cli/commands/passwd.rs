use crate::cli::parser::Commands;
use crate::core::session::SessionController;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::AppContext;

/// Handle the `passwd` subcommand.
pub async fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Passwd { new_password } = cmd {
        let new_password = match new_password {
            Some(p) => p.clone(),
            None => dialoguer::Password::new()
                .with_prompt("New password")
                .with_confirmation("Confirm new password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::Io(std::io::Error::other(e.to_string())))?,
        };

        let mut controller = SessionController::new(&ctx.api, &mut ctx.store);
        controller.change_password(&new_password).await?;
        messages::success("Password changed.");
    }
    Ok(())
}
