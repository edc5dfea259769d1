//! Integration tests for the league edit page.

use clubadmin_client::{GatewayCall, GatewayOp, MockGateway};
use clubadmin_core::{EntityId, PageRequest};
use clubadmin_editor::{EditorError, PageState, messages};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::common::{TestHarness, league, two_teams};

const LIST: &str = "/liga";
const EDIT: &str = "/liga/edit/2";

fn harness(team: serde_json::Value) -> TestHarness {
    TestHarness::new()
        .with_leagues(MockGateway::new().with_entity(league(2, "Premier", Some(team))))
        .with_teams(two_teams())
        .with_history(&[LIST, EDIT])
}

#[tokio::test]
async fn test_loads_league_and_candidates() {
    let harness = harness(json!({ "id": "11", "nombre": "Reds" }));
    let page = harness.league_page();

    page.activate(Some("2")).await.unwrap();

    assert_eq!(page.state().get(), PageState::Loaded);
    assert_eq!(page.name().get(), "Premier");
    assert_eq!(page.team_id().get(), Some(EntityId::new(11)));
    assert_eq!(page.teams().get().len(), 2);
    assert!(!page.league_loading().get());
    assert!(!page.teams_loading().get());
    assert!(page.error().get().is_none());
    assert_eq!(
        harness.teams.calls(),
        vec![GatewayCall::GetPage(PageRequest::candidates())]
    );
}

#[tokio::test]
async fn test_bare_team_id_relation() {
    let harness = harness(json!(12));
    let page = harness.league_page();

    page.activate(Some("2")).await.unwrap();
    assert_eq!(page.team_id().get(), Some(EntityId::new(12)));
}

#[tokio::test]
async fn test_invalid_id_never_loads() {
    for param in [None, Some("0"), Some("abc")] {
        let harness = harness(json!(11));
        let page = harness.league_page();

        let err = page.activate(param).await.unwrap_err();

        assert!(matches!(err, EditorError::InvalidRouteParameter { .. }));
        assert_eq!(page.error().get().as_deref(), Some(messages::ID_INVALID));
        assert_eq!(page.state().get(), PageState::InvalidId);
        assert!(!page.league_loading().get());
        assert!(!page.teams_loading().get());
        assert_eq!(harness.leagues.call_count(), 0);
        assert_eq!(harness.teams.call_count(), 0);
    }
}

#[tokio::test]
async fn test_team_list_failure_leaves_league_editable() {
    let harness = TestHarness::new()
        .with_leagues(MockGateway::new().with_entity(league(2, "Premier", Some(json!(11)))))
        .with_teams(two_teams().failing(GatewayOp::GetPage))
        .with_history(&[LIST, EDIT]);
    let page = harness.league_page();

    page.activate(Some("2")).await.unwrap();

    assert_eq!(page.state().get(), PageState::Loaded);
    assert_eq!(page.name().get(), "Premier");
    assert!(page.error().get().is_none());
    assert_eq!(page.teams_error().get().as_deref(), Some(messages::TEAMS_LOAD_FAILED));
    assert!(page.teams().get().is_empty());
    assert!(!page.teams_loading().get());

    page.do_save().await.unwrap();
    assert_eq!(harness.leagues.count(GatewayOp::Update), 1);
}

#[tokio::test]
async fn test_league_failure_keeps_team_list() {
    let harness = TestHarness::new()
        .with_teams(two_teams())
        .with_history(&[LIST, EDIT]);
    let page = harness.league_page();

    let err = page.activate(Some("2")).await.unwrap_err();

    assert!(matches!(err, EditorError::Load { .. }));
    assert_eq!(page.state().get(), PageState::LoadError);
    assert_eq!(page.error().get().as_deref(), Some(messages::LEAGUE_LOAD_FAILED));
    assert!(!page.league_loading().get());
    assert_eq!(page.teams().get().len(), 2);
    assert!(page.teams_error().get().is_none());
}

#[tokio::test]
async fn test_save_after_failed_league_load_is_not_ready() {
    let harness = TestHarness::new()
        .with_teams(two_teams())
        .with_history(&[LIST, EDIT]);
    let page = harness.league_page();
    page.activate(Some("2")).await.unwrap_err();
    assert_eq!(page.id().get(), EntityId::new(2));

    page.set_name("Overwritten");
    page.select_team(Some(EntityId::new(11)));

    assert!(matches!(page.do_save().await, Err(EditorError::NotReady)));
    assert_eq!(page.state().get(), PageState::LoadError);
    assert_eq!(harness.leagues.count(GatewayOp::Update), 0);
    assert_eq!(harness.current_route().as_deref(), Some(EDIT));
}

#[tokio::test]
async fn test_save_without_team_is_rejected_locally() {
    let harness = harness(json!(null));
    let page = harness.league_page();
    page.activate(Some("2")).await.unwrap();
    assert!(page.team_id().get().is_none());

    let err = page.do_save().await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(page.error().get().as_deref(), Some(messages::TEAM_REQUIRED));
    assert_eq!(harness.notices(), vec![messages::TEAM_REQUIRED.to_string()]);
    assert_eq!(harness.leagues.count(GatewayOp::Update), 0);
    assert_eq!(harness.current_route().as_deref(), Some(EDIT));
}

#[tokio::test]
async fn test_save_with_non_positive_team_is_rejected() {
    let harness = harness(json!(11));
    let page = harness.league_page();
    page.activate(Some("2")).await.unwrap();
    page.select_team(Some(EntityId::new(0)));

    let err = page.do_save().await.unwrap_err();
    assert_eq!(err.to_string(), messages::TEAM_REQUIRED);
    assert_eq!(harness.leagues.count(GatewayOp::Update), 0);
}

#[tokio::test]
async fn test_save_with_blank_name_is_rejected() {
    let harness = harness(json!(11));
    let page = harness.league_page();
    page.activate(Some("2")).await.unwrap();
    page.set_name("   ");

    let err = page.do_save().await.unwrap_err();

    assert_eq!(err.to_string(), messages::NAME_REQUIRED);
    assert_eq!(page.error().get().as_deref(), Some(messages::NAME_REQUIRED));
    assert_eq!(harness.notices(), vec![messages::NAME_REQUIRED.to_string()]);
    assert_eq!(harness.leagues.count(GatewayOp::Update), 0);
}

#[tokio::test]
async fn test_save_sends_trimmed_name_and_minimal_team() {
    let harness = harness(json!({ "id": 11 }));
    let page = harness.league_page();
    page.activate(Some("2")).await.unwrap();
    page.set_name("  Premier League ");
    page.select_team(Some(EntityId::new(12)));

    page.do_save().await.unwrap();

    assert_eq!(
        harness.leagues.last_draft().unwrap(),
        json!({ "id": 2, "nombre": "Premier League", "equipo": { "id": 12 } })
    );
    assert_eq!(page.state().get(), PageState::Saved);
    assert!(!page.saving().get());
    assert_eq!(harness.current_route().as_deref(), Some(LIST));
}

#[tokio::test]
async fn test_save_failure_stays_editable() {
    let harness = TestHarness::new()
        .with_leagues(
            MockGateway::new()
                .with_entity(league(2, "Premier", Some(json!(11))))
                .failing(GatewayOp::Update),
        )
        .with_teams(two_teams())
        .with_history(&[LIST, EDIT]);
    let page = harness.league_page();
    page.activate(Some("2")).await.unwrap();

    let err = page.do_save().await.unwrap_err();

    assert!(matches!(err, EditorError::Save { .. }));
    assert_eq!(page.error().get().as_deref(), Some(messages::LEAGUE_UPDATE_FAILED));
    assert_eq!(page.state().get(), PageState::Loaded);
    assert!(!page.saving().get());
    assert_eq!(page.name().get(), "Premier");
    assert_eq!(harness.current_route().as_deref(), Some(EDIT));

    harness.leagues.set_failing(GatewayOp::Update, false);
    page.do_save().await.unwrap();
    assert!(page.error().get().is_none());
    assert_eq!(harness.current_route().as_deref(), Some(LIST));
}

#[tokio::test]
async fn test_overlapping_save_is_busy() {
    let latch = Arc::new(Notify::new());
    let harness = TestHarness::new()
        .with_leagues(
            MockGateway::new()
                .with_entity(league(2, "Premier", Some(json!(11))))
                .with_latch(latch.clone()),
        )
        .with_teams(two_teams())
        .with_history(&[LIST, EDIT]);
    let page = Arc::new(harness.league_page());

    // One permit for the league fetch.
    latch.notify_one();
    page.activate(Some("2")).await.unwrap();

    let mut saving = page.saving().subscribe();
    let first = {
        let page = page.clone();
        tokio::spawn(async move { page.do_save().await })
    };
    saving.wait_for(|s| *s).await.unwrap();

    assert!(matches!(page.do_save().await, Err(EditorError::Busy)));
    assert_eq!(page.state().get(), PageState::Saving);

    latch.notify_one();
    first.await.unwrap().unwrap();
    assert_eq!(harness.leagues.count(GatewayOp::Update), 1);
}

#[tokio::test]
async fn test_cancel_goes_back() {
    let harness = harness(json!(11));
    let page = harness.league_page();
    page.activate(Some("2")).await.unwrap();

    page.do_cancel();

    assert_eq!(harness.current_route().as_deref(), Some(LIST));
    assert_eq!(page.state().get(), PageState::Cancelled);
    assert_eq!(harness.leagues.count(GatewayOp::Update), 0);
}

#[tokio::test]
async fn test_save_before_activation_is_not_ready() {
    let harness = harness(json!(11));
    let page = harness.league_page();
    page.set_name("Premier");
    page.select_team(Some(EntityId::new(11)));

    assert!(matches!(page.do_save().await, Err(EditorError::NotReady)));
    assert_eq!(harness.leagues.call_count(), 0);
}

#[tokio::test]
async fn test_deactivate_drops_pending_loads() {
    let latch = Arc::new(Notify::new());
    let harness = TestHarness::new()
        .with_leagues(
            MockGateway::new()
                .with_entity(league(2, "Premier", Some(json!(11))))
                .with_latch(latch.clone()),
        )
        .with_teams(two_teams().with_latch(latch.clone()));
    let page = harness.league_page();

    let (result, ()) = tokio::join!(page.activate(Some("2")), async {
        tokio::task::yield_now().await;
        page.deactivate();
        latch.notify_waiters();
    });

    assert!(matches!(result, Err(EditorError::Cancelled)));
    assert_eq!(page.state().get(), PageState::Loading);
    assert!(page.name().get().is_empty());
    assert!(page.team_id().get().is_none());
    assert!(page.teams().get().is_empty());
    assert!(page.league_loading().get());
    assert!(page.teams_loading().get());
    assert!(harness.notices().is_empty());
}
