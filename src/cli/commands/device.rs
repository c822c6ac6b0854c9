use crate::errors::AppResult;
use crate::providers::device;
use crate::AppContext;

/// Handle the `device` subcommand: print the stable device identifier,
/// generating and persisting one on first use.
pub fn handle(ctx: &mut AppContext) -> AppResult<()> {
    let id = device::device_id(&mut ctx.store)?;
    println!("{}", id);
    Ok(())
}
