//! Home-load orchestration: profile and today's facts, combined through the
//! reconciliation engine.

use crate::api::ApiClient;
use crate::core::engine;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_state::AttendanceState;
use crate::models::facts::AttendanceFacts;
use crate::models::profile::Profile;
use crate::store::SessionStore;
use chrono::Duration;

/// Today's facts plus everything derived from them.
#[derive(Debug)]
pub struct DaySnapshot {
    pub facts: AttendanceFacts,
    pub state: AttendanceState,
    /// Worked duration, present once the shift is finished and both
    /// timestamps parse.
    pub worked: Option<Duration>,
}

/// Result of a home load. The facts fetch can fail independently of the
/// profile fetch; the profile stays usable either way.
#[derive(Debug)]
pub struct HomeData {
    pub profile: Profile,
    pub today: Result<DaySnapshot, AppError>,
}

/// Sequence the two fetches. A profile failure is fatal and the facts are
/// never requested; a facts failure is carried inside [`HomeData::today`].
pub async fn load_home(api: &ApiClient, store: &mut SessionStore) -> AppResult<HomeData> {
    let token = store
        .token()
        .ok_or(AppError::Unauthenticated)?
        .to_string();

    let profile: Profile = api
        .get_profile(&token)
        .await
        .map_err(|e| AppError::ProfileLoad(Box::new(e)))?
        .into();

    let today = fetch_today(api, store, &token)
        .await
        .map_err(|e| AppError::AttendanceLoad(Box::new(e)));

    Ok(HomeData { profile, today })
}

async fn fetch_today(
    api: &ApiClient,
    store: &mut SessionStore,
    token: &str,
) -> AppResult<DaySnapshot> {
    let facts = api.get_today_attendance(token).await?.into_facts()?;

    let state = engine::derive_state(&facts, store.state_label());
    store.set_state_label(state)?;

    let worked = match (state.is_finished(), &facts.entry_time, &facts.exit_time) {
        (true, Some(entry), Some(exit)) => engine::worked_duration(entry, exit),
        _ => None,
    };

    Ok(DaySnapshot {
        facts,
        state,
        worked,
    })
}
