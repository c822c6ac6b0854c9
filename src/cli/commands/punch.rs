use crate::core::dispatcher::{DayContext, Dispatcher};
use crate::core::home::load_home;
use crate::errors::{AppError, AppResult};
use crate::models::coordinates::Coordinates;
use crate::models::movement::MovementKind;
use crate::providers::location::ConfiguredLocation;
use crate::ui::messages;
use crate::utils::time::{format_duration, DURATION_UNAVAILABLE};
use crate::AppContext;

/// Handle the four movement subcommands (`in`, `pause`, `resume`, `out`).
pub async fn handle(kind: MovementKind, at: &Option<String>, ctx: &mut AppContext) -> AppResult<()> {
    //
    // 1. Parse the optional coordinates override.
    //
    let override_fix = match at {
        Some(s) => {
            Some(Coordinates::parse(s).ok_or_else(|| AppError::InvalidCoordinates(s.clone()))?)
        }
        None => None,
    };

    //
    // 2. Refresh server truth; the dispatcher validates against it.
    //
    let home = load_home(&ctx.api, &mut ctx.store).await?;
    let snapshot = home.today?;
    let day = DayContext {
        state: snapshot.state,
        allows_break: home.profile.allows_break,
        entry_time: snapshot.facts.entry_time.clone(),
    };

    //
    // 3. Dispatch.
    //
    let location = ConfiguredLocation::new(
        ctx.cfg.allow_location,
        override_fix,
        ctx.cfg.site_coordinates(),
    );
    let mut dispatcher = Dispatcher::new(&ctx.api, &mut ctx.store, &location);
    let outcome = dispatcher.register_movement(kind, &day).await?;

    messages::success(format!(
        "{} registered at {}",
        outcome.result.kind, outcome.result.time
    ));
    if !outcome.result.message.is_empty() {
        messages::info(&outcome.result.message);
    }
    if kind.is_exit() {
        let worked = outcome
            .worked
            .map(format_duration)
            .unwrap_or_else(|| DURATION_UNAVAILABLE.to_string());
        messages::info(format!("Worked today: {}", worked));
    }

    Ok(())
}
