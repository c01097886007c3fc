//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use glbot_chat_interface::ChatService;
use glbot_config::Config;
use glbot_core::{CoreContext, CoreModule};
use glbot_database_interface::DbService;
use tracing::info;

use crate::{
    health::health_check_route, webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// Chat adapter.
    pub chat_service: Box<dyn ChatService>,
    /// Database adapter.
    pub db_service: Box<dyn DbService>,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new(
        config: Config,
        core_module: CoreModule,
        chat_service: Box<dyn ChatService + Send + Sync>,
        db_service: Box<dyn DbService + Send + Sync>,
    ) -> Self {
        Self {
            config,
            core_module,
            chat_service,
            db_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            chat_service: self.chat_service.as_ref(),
            db_service: self.db_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context)
        .wrap(Logger::default())
        .service(web::scope("/gitlab").configure(configure_webhook_handlers))
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on glbot!" }))
            }),
        )
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            // Display Bad Request response on invalid JSON data
            error::InternalError::from_response(
                "",
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": err.to_string()
                })),
            )
            .into()
        }))
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting bot server",
    );

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
