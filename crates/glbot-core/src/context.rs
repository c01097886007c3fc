use glbot_chat_interface::ChatService;
use glbot_config::Config;
use glbot_database_interface::DbService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub chat_service: &'a (dyn ChatService + 'a),
    pub db_service: &'a (dyn DbService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use glbot_chat_interface::MockChatService;
    use glbot_config::Config;
    use glbot_database_memory::MemoryDb;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub chat_service: MockChatService,
        pub db_service: MemoryDb,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                chat_service: MockChatService::new(),
                db_service: MemoryDb::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                chat_service: &self.chat_service,
                db_service: &self.db_service,
            }
        }
    }
}
