use crate::core::home::load_home;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time::{format_duration, DURATION_UNAVAILABLE};
use crate::AppContext;

/// Handle the `status` subcommand: one home load, printed.
pub async fn handle(ctx: &mut AppContext) -> AppResult<()> {
    let home = load_home(&ctx.api, &mut ctx.store).await?;

    println!();
    messages::field("Name", &home.profile.full_name);
    messages::field("Shift", &home.profile.active_shift);
    messages::field(
        "Breaks",
        if home.profile.allows_break {
            "allowed"
        } else {
            "not allowed"
        },
    );

    match &home.today {
        Ok(snap) => {
            println!();
            messages::field("Date", snap.facts.date.format("%Y-%m-%d"));
            messages::field("Entry", snap.facts.entry_time.as_deref().unwrap_or("—"));
            messages::field("Exit", snap.facts.exit_time.as_deref().unwrap_or("—"));
            messages::field("State", snap.state);

            if snap.state.is_finished() {
                let worked = snap
                    .worked
                    .map(format_duration)
                    .unwrap_or_else(|| DURATION_UNAVAILABLE.to_string());
                messages::field("Worked", worked);
            }

            if snap.facts.is_holiday {
                let desc = snap.facts.holiday_desc.as_deref().unwrap_or("holiday");
                messages::info(format!("Today is a holiday: {}", desc));
            }
            if snap.facts.on_leave {
                let desc = snap.facts.leave_desc.as_deref().unwrap_or("active leave");
                messages::info(format!("A leave applies today: {}", desc));
            }
        }
        Err(e) => {
            // Profile data above stays visible even when the facts fetch
            // failed.
            messages::warning(e);
        }
    }

    Ok(())
}
