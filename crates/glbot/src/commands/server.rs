use anyhow::Result;
use clap::Args;
use glbot_chat_interface::ChatService;
use glbot_chat_null::NullChatService;
use glbot_config::{ChatDriver, Config, DatabaseDriver};
use glbot_core::CoreModule;
use glbot_database_interface::DbService;
use glbot_database_json::JsonFileDb;
use glbot_database_memory::MemoryDb;
use glbot_server::server::{run_bot_server, AppContext};
use tracing::info;

/// Start the bot server.
#[derive(Args)]
pub(crate) struct ServerCommand;

impl ServerCommand {
    pub(crate) fn run(self, config: Config) -> Result<()> {
        actix_rt::System::new().block_on(async move {
            let core_module = CoreModule::builder().build();

            let db_service: Box<dyn DbService + Send + Sync + 'static> = {
                if config.database.driver == DatabaseDriver::Json {
                    info!(
                        path = %config.database.json.path,
                        message = "Using JsonFileDb database driver",
                    );
                    Box::new(JsonFileDb::new(&config.database.json.path))
                } else {
                    info!("Using MemoryDb database driver");
                    Box::new(MemoryDb::new())
                }
            };

            let chat_service: Box<dyn ChatService + Send + Sync + 'static> =
                match config.chat.driver {
                    ChatDriver::Null => {
                        info!("Using NullChatService chat driver");
                        Box::new(NullChatService::new())
                    }
                };

            let context = AppContext::new(config, core_module, chat_service, db_service);
            run_bot_server(context).await?;

            Ok(())
        })
    }
}
