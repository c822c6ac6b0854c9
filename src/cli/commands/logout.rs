use crate::core::session::SessionController;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::AppContext;

/// Handle the `logout` subcommand.
pub fn handle(ctx: &mut AppContext) -> AppResult<()> {
    let mut controller = SessionController::new(&ctx.api, &mut ctx.store);
    controller.logout()?;
    messages::success("Session cleared.");
    Ok(())
}
