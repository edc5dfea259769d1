//! Integration tests for the club form controller.

use clubadmin_client::{GatewayCall, GatewayOp, MockGateway};
use clubadmin_core::{DateValue, EntityId, to_editable_date};
use clubadmin_editor::{ClubField, EditorError, FormExit, FormMode, FormPhase, messages};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::common::{TestHarness, club};

#[tokio::test]
async fn test_mount_defaults_for_create() {
    let harness = TestHarness::new();
    let form = harness.club_form(None, FormMode::Create);

    let fields = form.fields().get();
    assert_eq!(fields.id, EntityId::NEW);
    assert!(fields.name.is_empty());
    assert_eq!(fields.registration_date, to_editable_date(DateValue::Empty));
    assert_eq!(form.phase(), FormPhase::Ready);
    assert_eq!(harness.clubs.call_count(), 0);
}

#[tokio::test]
async fn test_mount_patches_supplied_club() {
    let harness = TestHarness::new();
    let mut stored = club(3, "Oak FC");
    stored.image = Some(String::new());
    let form = harness.club_form(Some(stored), FormMode::Edit);

    let fields = form.fields().get();
    assert_eq!(fields.id, EntityId::new(3));
    assert_eq!(fields.name, "Oak FC");
    assert_eq!(fields.registration_date, "2023-09-01");
    assert!(fields.image.is_none());
}

#[tokio::test]
async fn test_short_name_never_reaches_gateway() {
    let harness = TestHarness::new();
    let form = harness.club_form(None, FormMode::Create);
    form.edit(|f| f.name = "Oa".to_string());

    let err = form.submit().await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), messages::FORM_INVALID);
    assert_eq!(harness.clubs.call_count(), 0);
    assert_eq!(form.error().get().as_deref(), Some(messages::FORM_INVALID));
    assert_eq!(harness.notices(), vec![messages::FORM_INVALID]);
    assert!(ClubField::ALL.iter().all(|f| form.is_touched(*f)));
    assert!(!form.submitting().get());
    assert_eq!(form.phase(), FormPhase::ReadyWithError);
}

#[tokio::test]
async fn test_missing_date_is_invalid() {
    let harness = TestHarness::new();
    let form = harness.club_form(None, FormMode::Create);
    form.edit(|f| {
        f.name = "Oak FC".to_string();
        f.registration_date.clear();
    });

    let validation = form.validate();
    assert_eq!(
        validation.invalid_fields().collect::<Vec<_>>(),
        vec![ClubField::RegistrationDate]
    );
    assert!(form.submit().await.unwrap_err().is_validation());
    assert_eq!(harness.clubs.call_count(), 0);
}

#[tokio::test]
async fn test_create_sends_no_id_and_empty_collections() {
    let harness = TestHarness::new();
    let form = harness.club_form(None, FormMode::Create);
    form.edit(|f| {
        f.name = "Oak FC".to_string();
        f.address = "1 Elm St".to_string();
        f.registration_date = "2024-01-15".to_string();
        f.image = Some(String::new());
    });

    let exit = form.submit().await.unwrap();

    assert_eq!(exit, FormExit::Saved { id: EntityId::new(1) });
    assert_eq!(harness.clubs.count(GatewayOp::Create), 1);
    let body = harness.clubs.last_draft().unwrap();
    assert!(body.get("id").is_none());
    assert_eq!(body["nombre"], "Oak FC");
    assert_eq!(body["direccion"], "1 Elm St");
    assert_eq!(body["fechaAlta"], "2024-01-15T00:00:00");
    assert_eq!(body["imagen"], Value::Null);
    for collection in ["temporadas", "noticias", "tipoarticulos", "usuarios"] {
        assert_eq!(body[collection], json!([]), "{collection}");
    }
    assert_eq!(harness.notices(), vec![messages::CLUB_CREATED]);
    assert_eq!(form.phase(), FormPhase::Exited);
}

#[tokio::test]
async fn test_edit_updates_with_original_id() {
    let harness = TestHarness::new();
    let form = harness.club_form(Some(club(3, "Oak FC")), FormMode::Edit);
    form.edit(|f| f.name = "Oak Football Club".to_string());

    let exit = form.submit().await.unwrap();

    assert_eq!(exit, FormExit::Saved { id: EntityId::new(3) });
    let calls = harness.clubs.calls();
    assert_eq!(calls.len(), 1);
    let GatewayCall::Update(body) = &calls[0] else {
        unreachable!("expected an update, got {:?}", calls[0]);
    };
    assert_eq!(body["id"], json!(3));
    assert_eq!(body["nombre"], "Oak Football Club");
    assert_eq!(body["fechaAlta"], "2023-09-01T00:00:00");
    assert!(body.get("temporadas").is_none());
    assert_eq!(harness.notices(), vec![messages::CLUB_UPDATED]);
}

#[tokio::test]
async fn test_failed_create_keeps_values_for_retry() {
    let harness =
        TestHarness::new().with_clubs(MockGateway::new().failing(GatewayOp::Create));
    let form = harness.club_form(None, FormMode::Create);
    form.edit(|f| f.name = "Oak FC".to_string());

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, EditorError::Save { .. }));
    assert_eq!(err.to_string(), messages::CLUB_CREATE_FAILED);
    assert_eq!(form.error().get().as_deref(), Some(messages::CLUB_CREATE_FAILED));
    assert_eq!(form.fields().get().name, "Oak FC");
    assert!(!form.submitting().get());
    assert_eq!(form.phase(), FormPhase::ReadyWithError);

    harness.clubs.set_failing(GatewayOp::Create, false);
    let exit = form.submit().await.unwrap();
    assert!(matches!(exit, FormExit::Saved { .. }));
    assert!(form.error().get().is_none());
    assert_eq!(harness.clubs.count(GatewayOp::Create), 2);
    assert_eq!(
        harness.notices(),
        vec![messages::CLUB_CREATE_FAILED, messages::CLUB_CREATED]
    );
}

#[tokio::test]
async fn test_failed_update_message() {
    let harness =
        TestHarness::new().with_clubs(MockGateway::new().failing(GatewayOp::Update));
    let form = harness.club_form(Some(club(3, "Oak FC")), FormMode::Edit);

    let err = form.submit().await.unwrap_err();
    assert_eq!(err.to_string(), messages::CLUB_UPDATE_FAILED);
    assert_eq!(harness.notices(), vec![messages::CLUB_UPDATE_FAILED]);
}

#[tokio::test]
async fn test_overlapping_submit_is_busy() {
    let latch = Arc::new(Notify::new());
    let harness = TestHarness::new().with_clubs(MockGateway::new().with_latch(latch.clone()));
    let form = Arc::new(harness.club_form(None, FormMode::Create));
    form.edit(|f| f.name = "Oak FC".to_string());

    let mut submitting = form.submitting().subscribe();
    let first = {
        let form = form.clone();
        tokio::spawn(async move { form.submit().await })
    };
    submitting.wait_for(|s| *s).await.unwrap();

    let second = form.submit().await;
    assert!(matches!(second, Err(EditorError::Busy)));
    assert_eq!(form.phase(), FormPhase::Submitting);

    latch.notify_one();
    let exit = first.await.unwrap().unwrap();
    assert!(matches!(exit, FormExit::Saved { .. }));
    assert_eq!(harness.clubs.count(GatewayOp::Create), 1);
}

#[tokio::test]
async fn test_cancel_touches_nothing() {
    let harness = TestHarness::new();
    let form = harness.club_form(Some(club(3, "Oak FC")), FormMode::Edit);
    form.edit(|f| f.name = "Changed".to_string());
    let before = form.fields().get();

    assert_eq!(form.cancel(), FormExit::Cancelled);
    assert_eq!(form.fields().get(), before);
    assert!(form.error().get().is_none());
    assert_eq!(harness.clubs.call_count(), 0);
    assert!(harness.notices().is_empty());
}

#[tokio::test]
async fn test_load_patches_fetched_club() {
    let harness = TestHarness::new().with_clubs(MockGateway::new().with_entity(club(3, "Oak FC")));
    let form = harness.club_form(None, FormMode::Edit);

    form.load(EntityId::new(3)).await.unwrap();

    assert!(!form.loading().get());
    assert_eq!(form.fields().get().name, "Oak FC");
    assert_eq!(form.club().get().unwrap().id, EntityId::new(3));

    form.submit().await.unwrap();
    assert_eq!(harness.clubs.last_draft().unwrap()["id"], json!(3));
}

#[tokio::test]
async fn test_load_failure_reports() {
    let harness = TestHarness::new();
    let form = harness.club_form(None, FormMode::Edit);

    let err = form.load(EntityId::new(9)).await.unwrap_err();

    assert!(matches!(err, EditorError::Load { .. }));
    assert_eq!(form.error().get().as_deref(), Some(messages::CLUB_LOAD_FAILED));
    assert_eq!(harness.notices(), vec![messages::CLUB_LOAD_FAILED]);
    assert!(!form.loading().get());
}
