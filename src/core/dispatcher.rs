//! Action dispatcher: precondition checks, movement registration, and the
//! write-through of the resulting state label.

use crate::api::models::RegisterMovementBody;
use crate::api::ApiClient;
use crate::core::engine;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_state::AttendanceState;
use crate::models::movement::{MovementKind, MovementRequest, MovementResult};
use crate::providers::device;
use crate::providers::location::LocationProvider;
use crate::store::SessionStore;
use chrono::Duration;

/// What the caller already knows about today, from the last home load.
#[derive(Debug, Clone)]
pub struct DayContext {
    pub state: AttendanceState,
    /// Shift-level break permission, from the profile.
    pub allows_break: bool,
    /// Entry time known to the caller, "HH:MM". Needed to compute the worked
    /// duration when the movement is an exit.
    pub entry_time: Option<String>,
}

#[derive(Debug)]
pub struct MovementOutcome {
    pub result: MovementResult,
    /// The state the movement landed in.
    pub state: AttendanceState,
    /// Worked duration, computed on exit when both timestamps parse.
    pub worked: Option<Duration>,
}

pub struct Dispatcher<'a> {
    api: &'a ApiClient,
    store: &'a mut SessionStore,
    location: &'a dyn LocationProvider,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        api: &'a ApiClient,
        store: &'a mut SessionStore,
        location: &'a dyn LocationProvider,
    ) -> Self {
        Self {
            api,
            store,
            location,
        }
    }

    /// Register one movement. A failed call leaves all state unchanged; the
    /// user re-invokes explicitly, nothing retries on its own.
    pub async fn register_movement(
        &mut self,
        kind: MovementKind,
        ctx: &DayContext,
    ) -> AppResult<MovementOutcome> {
        // State validity is checked here, not in the engine: the transition
        // table is total, so invalid combinations must be stopped before the
        // network is touched.
        if !engine::movement_allowed(ctx.state, kind, ctx.allows_break) {
            return Err(AppError::InvalidMovement {
                state: ctx.state,
                movement: kind,
            });
        }

        // Preconditions, strictly in order: permission, coordinates, token.
        if !self.location.has_permission() {
            return Err(AppError::LocationPermissionDenied);
        }
        let coordinates = self
            .location
            .current_coordinates()
            .await
            .ok_or(AppError::LocationUnavailable)?;
        let token = self
            .store
            .token()
            .ok_or(AppError::Unauthenticated)?
            .to_string();
        let device_id = device::device_id(self.store)?;

        let request = MovementRequest {
            kind,
            location: coordinates,
        };
        let response = self
            .api
            .register_movement(
                &token,
                &device_id,
                RegisterMovementBody {
                    movement_kind: request.kind.as_wire_str().to_string(),
                    location: request.location.to_string(),
                },
            )
            .await?;

        let state = engine::next_state(kind);

        // The label is the sole source of break recovery after a restart:
        // if it cannot be persisted the whole operation is a failure.
        self.store.set_state_label(state)?;

        let worked = match (kind.is_exit(), &ctx.entry_time) {
            (true, Some(entry)) => engine::worked_duration(entry, &response.time),
            _ => None,
        };

        Ok(MovementOutcome {
            result: MovementResult {
                time: response.time,
                message: response.message,
                kind,
            },
            state,
            worked,
        })
    }
}
