//! Integration tests for the club edit and create pages.

use clubadmin_client::{GatewayOp, MockGateway};
use clubadmin_core::EntityId;
use clubadmin_editor::{EditorError, FormExit, FormMode, PageState, messages, routes};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::common::{TestHarness, club};

fn harness_with_club() -> TestHarness {
    TestHarness::new()
        .with_clubs(MockGateway::new().with_entity(club(3, "Oak FC")))
        .with_history(&["/club", "/club/edit/3"])
}

#[tokio::test]
async fn test_absent_or_placeholder_id_never_loads() {
    for param in [None, Some(""), Some("0")] {
        let harness = harness_with_club();
        let page = harness.club_edit_page();

        let err = page.activate(param).await.unwrap_err();

        assert!(matches!(err, EditorError::InvalidRouteParameter { .. }));
        assert_eq!(
            page.error().get().as_deref(),
            Some(messages::CLUB_ID_INVALID),
            "param {param:?}"
        );
        assert_eq!(page.state().get(), PageState::InvalidId);
        assert!(!page.loading().get());
        assert_eq!(harness.clubs.call_count(), 0);
    }
}

#[tokio::test]
async fn test_non_numeric_id_never_loads() {
    for param in ["abc", "3x", "-2", "1.5"] {
        let harness = harness_with_club();
        let page = harness.club_edit_page();

        assert!(page.activate(Some(param)).await.is_err());

        assert_eq!(
            page.error().get().as_deref(),
            Some(messages::ID_INVALID),
            "param {param}"
        );
        assert_eq!(page.state().get(), PageState::InvalidId);
        assert_eq!(harness.clubs.call_count(), 0);
    }
}

#[tokio::test]
async fn test_loads_club_and_saves_through_form() {
    let harness = harness_with_club();
    let page = harness.club_edit_page();

    page.activate(Some(" 3 ")).await.unwrap();

    assert_eq!(page.id().get(), EntityId::new(3));
    assert_eq!(page.state().get(), PageState::Loaded);
    assert!(!page.loading().get());
    assert_eq!(page.club().get().unwrap().name, "Oak FC");

    let form = page.form().unwrap();
    assert_eq!(form.mode(), FormMode::Edit);
    form.edit(|f| f.phone = "555-0199".to_string());
    let exit = form.submit().await.unwrap();
    page.handle_exit(exit);

    assert_eq!(harness.clubs.count(GatewayOp::Get), 1);
    assert_eq!(harness.clubs.count(GatewayOp::Update), 1);
    let body = harness.clubs.last_draft().unwrap();
    assert_eq!(body["id"], json!(3));
    assert_eq!(body["telefono"], "555-0199");
    assert_eq!(harness.current_route().as_deref(), Some(routes::CLUB_LIST));
    assert_eq!(page.state().get(), PageState::Saved);
}

#[tokio::test]
async fn test_load_failure_reports_and_blocks_form() {
    let harness = TestHarness::new();
    let page = harness.club_edit_page();

    let err = page.activate(Some("42")).await.unwrap_err();

    assert!(matches!(err, EditorError::Load { .. }));
    assert_eq!(page.error().get().as_deref(), Some(messages::CLUB_LOAD_FAILED));
    assert_eq!(harness.notices(), vec![messages::CLUB_LOAD_FAILED]);
    assert_eq!(page.state().get(), PageState::LoadError);
    assert!(!page.loading().get());
    assert!(matches!(page.form(), Err(EditorError::NotReady)));
}

#[tokio::test]
async fn test_form_cancel_returns_to_list() {
    let harness = harness_with_club();
    let page = harness.club_edit_page();
    page.activate(Some("3")).await.unwrap();

    let form = page.form().unwrap();
    page.handle_exit(form.cancel());

    assert_eq!(harness.current_route().as_deref(), Some(routes::CLUB_LIST));
    assert_eq!(page.state().get(), PageState::Cancelled);
    assert_eq!(harness.clubs.count(GatewayOp::Update), 0);
}

#[tokio::test]
async fn test_deactivate_drops_pending_load() {
    let latch = Arc::new(Notify::new());
    let harness = TestHarness::new().with_clubs(
        MockGateway::new()
            .with_entity(club(3, "Oak FC"))
            .with_latch(latch.clone()),
    );
    let page = harness.club_edit_page();

    let (result, ()) = tokio::join!(page.activate(Some("3")), async {
        tokio::task::yield_now().await;
        page.deactivate();
        latch.notify_one();
    });

    assert!(matches!(result, Err(EditorError::Cancelled)));
    assert!(page.club().get().is_none());
    assert!(page.error().get().is_none());
    assert!(page.loading().get());
    assert!(harness.notices().is_empty());
}

#[tokio::test]
async fn test_new_page_creates_oak_fc() {
    let harness = TestHarness::new().with_history(&["/club", routes::CLUB_NEW]);
    let page = harness.club_new_page();

    let form = page.form();
    assert_eq!(form.mode(), FormMode::Create);
    form.edit(|f| {
        f.name = "Oak FC".to_string();
        f.registration_date = "2024-01-15".to_string();
    });
    let exit = form.submit().await.unwrap();
    page.handle_exit(exit);

    assert!(matches!(exit, FormExit::Saved { .. }));
    let body = harness.clubs.last_draft().unwrap();
    assert_eq!(body["fechaAlta"], "2024-01-15T00:00:00");
    assert!(body.get("id").is_none());
    for collection in ["temporadas", "noticias", "tipoarticulos", "usuarios"] {
        assert_eq!(body[collection], json!([]), "{collection}");
    }
    assert_eq!(harness.notices(), vec![messages::CLUB_CREATED]);
    assert_eq!(harness.current_route().as_deref(), Some(routes::CLUB_LIST));
    assert_eq!(page.state().get(), PageState::Saved);
}

#[tokio::test]
async fn test_new_page_cancel() {
    let harness = TestHarness::new();
    let page = harness.club_new_page();

    page.on_form_cancel();

    assert_eq!(harness.current_route().as_deref(), Some(routes::CLUB_LIST));
    assert_eq!(page.state().get(), PageState::Cancelled);
    assert_eq!(harness.clubs.call_count(), 0);
}
