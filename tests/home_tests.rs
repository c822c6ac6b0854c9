mod common;
use common::{profile_body, scripted_client, setup_store, today_body};

use enturno::core::home::load_home;
use enturno::errors::AppError;
use enturno::models::attendance_state::AttendanceState;

#[tokio::test]
async fn profile_failure_is_fatal_and_skips_the_facts_fetch() {
    let (api, transport) = scripted_client();
    let mut store = setup_store("home_profile_fail");
    store.set_token("tok").unwrap();
    transport.push_ok(500, "oops");

    let err = load_home(&api, &mut store).await.unwrap_err();

    assert!(matches!(err, AppError::ProfileLoad(_)));
    assert_eq!(transport.request_paths(), vec!["auth/me"]);
}

#[tokio::test]
async fn facts_failure_keeps_the_profile_visible() {
    let (api, transport) = scripted_client();
    let mut store = setup_store("home_facts_fail");
    store.set_token("tok").unwrap();
    transport.push_ok(200, &profile_body(true));
    transport.push_err(AppError::Network("timed out".to_string()));

    let home = load_home(&api, &mut store).await.unwrap();

    assert_eq!(home.profile.full_name, "Jane Doe");
    assert!(matches!(home.today, Err(AppError::AttendanceLoad(_))));
    assert_eq!(transport.request_paths(), vec!["auth/me", "attendance/today"]);
}

#[tokio::test]
async fn no_token_means_no_requests_at_all() {
    let (api, transport) = scripted_client();
    let mut store = setup_store("home_no_token");

    let err = load_home(&api, &mut store).await.unwrap_err();

    assert!(matches!(err, AppError::Unauthenticated));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn fresh_day_derives_not_started() {
    let (api, transport) = scripted_client();
    let mut store = setup_store("home_fresh");
    store.set_token("tok").unwrap();
    transport.push_ok(200, &profile_body(true));
    transport.push_ok(200, &today_body(None, None));

    let home = load_home(&api, &mut store).await.unwrap();
    let snap = home.today.unwrap();

    assert_eq!(snap.state, AttendanceState::NotStarted);
    assert!(snap.worked.is_none());
    assert_eq!(store.state_label(), Some("NOT_STARTED"));
}

#[tokio::test]
async fn break_survives_a_restart_through_the_persisted_label() {
    let (api, transport) = scripted_client();
    let mut store = setup_store("home_break_restart");
    store.set_token("tok").unwrap();
    // The app went away mid-break; only the label remembers.
    store.set_state_label(AttendanceState::Paused).unwrap();
    transport.push_ok(200, &profile_body(true));
    transport.push_ok(200, &today_body(Some("09:00"), None));

    let home = load_home(&api, &mut store).await.unwrap();
    let snap = home.today.unwrap();

    assert_eq!(snap.state, AttendanceState::Paused);
    assert_eq!(store.state_label(), Some("PAUSED"));
}

#[tokio::test]
async fn stale_finished_label_never_beats_backend_facts() {
    let (api, transport) = scripted_client();
    let mut store = setup_store("home_stale_label");
    store.set_token("tok").unwrap();
    store.set_state_label(AttendanceState::Finished).unwrap();
    transport.push_ok(200, &profile_body(true));
    transport.push_ok(200, &today_body(Some("09:00"), None));

    let home = load_home(&api, &mut store).await.unwrap();
    let snap = home.today.unwrap();

    // Backend says entry-only, so the stale label collapses to Working and
    // the store is rewritten with the derived state.
    assert_eq!(snap.state, AttendanceState::Working);
    assert_eq!(store.state_label(), Some("WORKING"));
}

#[tokio::test]
async fn finished_day_computes_worked_duration() {
    let (api, transport) = scripted_client();
    let mut store = setup_store("home_finished");
    store.set_token("tok").unwrap();
    transport.push_ok(200, &profile_body(false));
    transport.push_ok(200, &today_body(Some("09:00"), Some("17:30")));

    let home = load_home(&api, &mut store).await.unwrap();
    assert!(!home.profile.allows_break);
    let snap = home.today.unwrap();

    assert_eq!(snap.state, AttendanceState::Finished);
    assert_eq!(snap.worked.unwrap().num_minutes(), 8 * 60 + 30);
    assert_eq!(store.state_label(), Some("FINISHED"));
}

#[tokio::test]
async fn malformed_facts_body_surfaces_as_attendance_load_error() {
    let (api, transport) = scripted_client();
    let mut store = setup_store("home_bad_body");
    store.set_token("tok").unwrap();
    transport.push_ok(200, &profile_body(true));
    transport.push_ok(200, "not json");

    let home = load_home(&api, &mut store).await.unwrap();
    assert!(matches!(home.today, Err(AppError::AttendanceLoad(_))));
}
