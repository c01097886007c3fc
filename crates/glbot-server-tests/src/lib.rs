#![cfg(test)]

use glbot_chat_interface::ChatService;
use glbot_chat_null::NullChatService;
use glbot_config::Config;
use glbot_core::CoreModule;
use glbot_database_interface::DbService;
use glbot_database_memory::MemoryDb;
use glbot_server::server::{run_bot_server, AppContext};
use reqwest::StatusCode;
use serde::Deserialize;

fn build_context(
    port: u16,
    core_module: CoreModule,
    chat_service: Box<dyn ChatService + Send + Sync>,
    db_service: Box<dyn DbService + Send + Sync>,
) -> AppContext {
    let mut config = Config::from_env_no_version();
    config.server.workers_count = Some(2);
    config.server.bind_ip = "127.0.0.1".into();
    config.server.bind_port = port;
    config.chat.notification_channel = "#gitlab".into();

    AppContext::new(config, core_module, chat_service, db_service)
}

fn spawn_server(
    port: u16,
    core_module: CoreModule,
    chat_service: Box<dyn ChatService + Send + Sync>,
    db_service: Box<dyn DbService + Send + Sync>,
) {
    tokio::task::spawn_local(async move {
        let context = build_context(port, core_module, chat_service, db_service);
        run_bot_server(context).await
    });
}

#[tokio::test]
#[ignore]
async fn index() {
    const PORT: u16 = 50601;

    #[derive(Deserialize, Debug, PartialEq, Eq)]
    struct Response {
        message: String,
    }

    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async move {
            spawn_server(
                PORT,
                CoreModule::builder().build(),
                Box::new(NullChatService::new()),
                Box::new(MemoryDb::new()),
            );

            let response = reqwest::get(format!("http://127.0.0.1:{PORT}"))
                .await
                .unwrap();
            let text: Response = response.json().await.unwrap();

            assert_eq!(
                text,
                Response {
                    message: "Welcome on glbot!".into()
                }
            );
        })
        .await;
}

#[tokio::test]
#[ignore]
async fn health() {
    const PORT: u16 = 50602;

    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async move {
            spawn_server(
                PORT,
                CoreModule::builder().build(),
                Box::new(NullChatService::new()),
                Box::new(MemoryDb::new()),
            );

            let response = reqwest::get(format!("http://127.0.0.1:{PORT}/health"))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        })
        .await;
}

#[tokio::test]
#[ignore]
async fn system_notices() {
    const PORT: u16 = 50603;

    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async move {
            spawn_server(
                PORT,
                CoreModule::builder().build(),
                Box::new(NullChatService::new()),
                Box::new(MemoryDb::new()),
            );

            let response = reqwest::Client::new()
                .post(format!(
                    "http://127.0.0.1:{PORT}/gitlab/system_notices?channel=ops"
                ))
                .json(&serde_json::json!({
                    "event_name": "user_create",
                    "name": "Ada",
                    "email": "ada@x.com"
                }))
                .send()
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::ACCEPTED);
        })
        .await;
}

#[tokio::test]
#[ignore]
async fn project_notices() {
    const PORT: u16 = 50604;

    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async move {
            spawn_server(
                PORT,
                CoreModule::builder().build(),
                Box::new(NullChatService::new()),
                Box::new(MemoryDb::new()),
            );

            let response = reqwest::Client::new()
                .post(format!(
                    "http://127.0.0.1:{PORT}/gitlab/project_notices?channel=dev"
                ))
                .json(&serde_json::json!({
                    "ref": "refs/heads/main",
                    "repository": { "name": "repo1" },
                    "commits": [
                        {
                            "id": "abcdef1234567",
                            "message": "fix bug",
                            "author": { "name": "Bob", "email": "b@x.com" }
                        }
                    ]
                }))
                .send()
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::ACCEPTED);
        })
        .await;
}
