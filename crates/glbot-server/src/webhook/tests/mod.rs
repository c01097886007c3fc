//! Webhook handler tests.


use actix_web::{http::StatusCode, test as actix_test, web::Data};
use glbot_chat_interface::MockChatService;
use glbot_config::Config;
use glbot_core::CoreModule;
use glbot_database_memory::MemoryDb;
use glbot_models::events::{GlSystemEvent, SystemEventType};
use pretty_assertions::assert_eq;

use super::{push::parse_push_event, system};
use crate::server::{build_actix_app, AppContext};

fn test_config() -> Config {
    let mut config = Config::from_env_no_version();
    config.name = "GitLab".into();
    config.gitlab.endpoint = "http://gitlab.example.com/api/v3".into();
    config.chat.notification_channel = "#gitlab".into();
    config
}

fn build_context(chat_service: MockChatService) -> AppContext {
    AppContext::new(
        test_config(),
        CoreModule::builder().build(),
        Box::new(chat_service),
        Box::new(MemoryDb::new()),
    )
}

#[test]
fn classify_known_system_events() {
    assert_eq!(
        system::classify_system_event(fixtures::PROJECT_CREATE_DATA).unwrap(),
        Some(SystemEventType::ProjectCreate)
    );
    assert_eq!(
        system::classify_system_event(fixtures::USER_CREATE_DATA).unwrap(),
        Some(SystemEventType::UserCreate)
    );
}

#[test]
fn classify_unknown_system_event() {
    assert_eq!(
        system::classify_system_event(fixtures::UNKNOWN_EVENT_DATA).unwrap(),
        None
    );
}

#[test]
fn classify_rejects_garbage() {
    assert!(system::classify_system_event("not json").is_err());
}

#[test]
fn parse_project_create_event() {
    let event =
        system::parse_system_event(SystemEventType::ProjectCreate, fixtures::PROJECT_CREATE_DATA)
            .unwrap();

    match event {
        GlSystemEvent::ProjectCreated(payload) => {
            assert_eq!(payload.name, "StoreCloud");
            assert_eq!(payload.path_with_namespace, "jsmith/storecloud");
        }
        other => panic!("Unexpected event: {other:?}"),
    }
}

#[test]
fn parse_project_destroy_event() {
    let event = system::parse_system_event(
        SystemEventType::ProjectDestroy,
        fixtures::PROJECT_DESTROY_DATA,
    )
    .unwrap();

    match event {
        GlSystemEvent::ProjectDestroyed(payload) => {
            assert_eq!(payload.name, "Underscore");
        }
        other => panic!("Unexpected event: {other:?}"),
    }
}

#[test]
fn parse_user_add_to_team_event() {
    let event = system::parse_system_event(
        SystemEventType::UserAddToTeam,
        fixtures::USER_ADD_TO_TEAM_DATA,
    )
    .unwrap();

    match event {
        GlSystemEvent::TeamMemberAdded(payload) => {
            assert_eq!(payload.project_access, "Maintainer");
            assert_eq!(payload.user_name, "John Smith");
        }
        other => panic!("Unexpected event: {other:?}"),
    }
}

#[test]
fn parse_system_event_with_missing_fields() {
    assert!(
        system::parse_system_event(SystemEventType::UserCreate, r#"{"event_name":"user_create"}"#)
            .is_err()
    );
}

#[test]
fn parse_push_event_fixture() {
    let event = parse_push_event(fixtures::PUSH_DATA).unwrap();

    assert_eq!(event.git_ref, "refs/heads/main");
    assert_eq!(event.repository.name, "Diaspora");
    assert_eq!(event.commits.len(), 2);
    assert_eq!(event.commits[1].message, "fixed readme");
}

#[actix_web::test]
async fn system_notice_joins_the_request_channel_and_relays_to_the_configured_one() {
    let mut chat = MockChatService::new();
    chat.expect_channel_members()
        .once()
        .withf(|channel| channel == "#ops")
        .return_once(|_| Ok(vec![]));
    chat.expect_join()
        .once()
        .withf(|channel, immediate| channel == "#ops" && *immediate)
        .return_once(|_, _| Ok(()));
    chat.expect_message()
        .once()
        .withf(|target, text| {
            target == "#gitlab" && text == "User: event: created - name: Ada <ada@x.com>"
        })
        .return_once(|_, _| Ok(()));

    let app = actix_test::init_service(build_actix_app(Data::new(build_context(chat)))).await;
    let req = actix_test::TestRequest::post()
        .uri("/gitlab/system_notices?channel=ops")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"event_name":"user_create","name":"Ada","email":"ada@x.com"}"#)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[actix_web::test]
async fn system_notice_with_unknown_event_relays_nothing() {
    let mut chat = MockChatService::new();
    chat.expect_channel_members()
        .once()
        .return_once(|_| Ok(vec!["GitLab".into()]));
    // No `message` expectation: unknown events are dropped.

    let app = actix_test::init_service(build_actix_app(Data::new(build_context(chat)))).await;
    let req = actix_test::TestRequest::post()
        .uri("/gitlab/system_notices?channel=ops")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(fixtures::UNKNOWN_EVENT_DATA)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[actix_web::test]
async fn system_notice_with_malformed_body_is_a_client_error() {
    let mut chat = MockChatService::new();
    // The join still happens: the original joins before reading the payload.
    chat.expect_channel_members()
        .once()
        .return_once(|_| Ok(vec!["GitLab".into()]));

    let app = actix_test::init_service(build_actix_app(Data::new(build_context(chat)))).await;
    let req = actix_test::TestRequest::post()
        .uri("/gitlab/system_notices?channel=ops")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn system_notice_delivery_failure_still_reports_success() {
    let mut chat = MockChatService::new();
    chat.expect_channel_members()
        .once()
        .return_once(|_| Ok(vec!["GitLab".into()]));
    chat.expect_message().once().return_once(|_, _| {
        Err(glbot_chat_interface::ChatError::UnknownChannel(
            "#gitlab".into(),
        ))
    });

    let app = actix_test::init_service(build_actix_app(Data::new(build_context(chat)))).await;
    let req = actix_test::TestRequest::post()
        .uri("/gitlab/system_notices?channel=ops")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(fixtures::USER_CREATE_DATA)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[actix_web::test]
async fn push_notice_relays_one_line_per_commit_to_the_request_channel() {
    let mut chat = MockChatService::new();
    chat.expect_channel_members()
        .once()
        .withf(|channel| channel == "#dev")
        .return_once(|_| Ok(vec!["GitLab".into()]));
    chat.expect_message()
        .times(2)
        .withf(|target, _text| target == "#dev")
        .returning(|_, _| Ok(()));

    let app = actix_test::init_service(build_actix_app(Data::new(build_context(chat)))).await;
    let req = actix_test::TestRequest::post()
        .uri("/gitlab/project_notices?channel=dev")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(fixtures::PUSH_DATA)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[actix_web::test]
async fn push_notice_line_carries_short_id_and_branch() {
    let mut chat = MockChatService::new();
    chat.expect_channel_members()
        .once()
        .return_once(|_| Ok(vec!["GitLab".into()]));
    chat.expect_message()
        .once()
        .withf(|target, text| {
            target == "#dev" && text.contains("\x02abcdef123\x02") && text.contains("\x038main\x03")
        })
        .return_once(|_, _| Ok(()));

    let body = serde_json::json!({
        "event_name": "push",
        "ref": "refs/heads/main",
        "repository": { "name": "repo1" },
        "commits": [
            {
                "id": "abcdef1234567",
                "message": "fix bug",
                "author": { "name": "Bob", "email": "b@x.com" }
            }
        ]
    });

    let app = actix_test::init_service(build_actix_app(Data::new(build_context(chat)))).await;
    let req = actix_test::TestRequest::post()
        .uri("/gitlab/project_notices?channel=dev")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(body.to_string())
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[actix_web::test]
async fn push_notice_with_malformed_body_is_a_client_error() {
    let mut chat = MockChatService::new();
    chat.expect_channel_members()
        .once()
        .return_once(|_| Ok(vec!["GitLab".into()]));

    let app = actix_test::init_service(build_actix_app(Data::new(build_context(chat)))).await;
    let req = actix_test::TestRequest::post()
        .uri("/gitlab/project_notices?channel=dev")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"ref": 42}"#)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn health_route_reports_database_status() {
    let app = actix_test::init_service(build_actix_app(Data::new(build_context(
        MockChatService::new(),
    ))))
    .await;
    let req = actix_test::TestRequest::get().uri("/health").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
