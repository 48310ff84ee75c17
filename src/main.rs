//! baranguide - entry point.
//!
//! Startup order:
//! 1. Load and validate configuration from the environment.
//! 2. Initialise tracing (JSON in production, plain text otherwise).
//! 3. Open storage (PostgreSQL pool or in-memory stores).
//! 4. Build the generation clients, background logger and handlers.
//! 5. Serve HTTP until SIGINT/SIGTERM, then drain the logger and close the pool.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use baranguide::adapters::http::{app_router, AdminAppState, ChatAppState, RouterOptions};
use baranguide::adapters::{
    GeminiConfig, GeminiProvider, InMemoryCatalog, InMemoryConversationLog, PostgresCatalog,
    PostgresConversationLog,
};
use baranguide::application::{
    AskQuestionHandler, ConversationLogger, GenerationClient, GenerationSettings,
    GetChatHistoryHandler, ManageFaqsHandler, ManageServicesHandler, SendChatMessageHandler,
};
use baranguide::config::{AppConfig, ConfigError, StorageBackend, ValidationError};
use baranguide::domain::conversation::{PromptComposer, QUICK_ANSWER_FALLBACK};
use baranguide::ports::{AIProvider, CatalogReader, CatalogRepository, ConversationLog};

struct Storage {
    reader: Arc<dyn CatalogReader>,
    repository: Arc<dyn CatalogRepository>,
    log: Arc<dyn ConversationLog>,
    pool: Option<PgPool>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "baranguide starting"
    );

    let storage = open_storage(&config).await?;

    let api_key = config
        .ai
        .gemini_api_key
        .clone()
        .ok_or(ConfigError::ValidationFailed(ValidationError::MissingRequired(
            "ai.gemini_api_key",
        )))?;
    let provider: Arc<dyn AIProvider> = Arc::new(GeminiProvider::new(
        GeminiConfig::from_secret(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    )?);
    info!(model = %config.ai.model, "generation provider ready");

    let mut settings = GenerationSettings::default()
        .with_timeout(config.ai.timeout())
        .with_max_output_tokens(config.ai.max_output_tokens);
    if let Some(temperature) = config.ai.temperature {
        settings = settings.with_temperature(temperature);
    }
    let generator = GenerationClient::new(provider.clone(), settings);
    let quick_generator = GenerationClient::new(
        provider,
        GenerationSettings::quick_answer(config.ai.timeout()),
    )
    .with_fallback(QUICK_ANSWER_FALLBACK);

    let composer = PromptComposer::new(config.chat.context_budget());
    let (logger, logger_worker) =
        ConversationLogger::spawn(storage.log.clone(), config.chat.logger_queue_capacity);

    let chat_state = ChatAppState::new(
        Arc::new(SendChatMessageHandler::new(
            storage.reader.clone(),
            storage.log.clone(),
            composer.clone(),
            generator,
            logger,
            config.chat.history_limit,
        )),
        Arc::new(AskQuestionHandler::new(
            storage.reader.clone(),
            composer,
            quick_generator,
        )),
        Arc::new(GetChatHistoryHandler::new(storage.log.clone())),
    );
    let admin_state = AdminAppState::new(
        Arc::new(ManageServicesHandler::new(
            storage.reader.clone(),
            storage.repository.clone(),
        )),
        Arc::new(ManageFaqsHandler::new(
            storage.reader.clone(),
            storage.repository.clone(),
        )),
    );

    let options = RouterOptions {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = app_router(chat_state, admin_state, &options);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logger_worker.shutdown().await;
    if let Some(pool) = storage.pool {
        pool.close().await;
    }

    info!("baranguide stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match config.server.log_level.parse::<EnvFilter>() {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!(
                    "WARN: log level '{}' is not a valid tracing filter ({}); falling back to 'info'",
                    config.server.log_level, e
                );
                EnvFilter::new("info")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if config.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn open_storage(config: &AppConfig) -> Result<Storage, sqlx::Error> {
    match config.database.backend {
        StorageBackend::Memory => {
            warn!("using in-memory storage; catalog and history are lost on restart");
            let catalog = Arc::new(InMemoryCatalog::new());
            Ok(Storage {
                reader: catalog.clone(),
                repository: catalog,
                log: Arc::new(InMemoryConversationLog::new()),
                pool: None,
            })
        }
        StorageBackend::Postgres => {
            let db = &config.database;
            let pool = PgPoolOptions::new()
                .min_connections(db.min_connections)
                .max_connections(db.max_connections)
                .acquire_timeout(db.acquire_timeout())
                .idle_timeout(db.idle_timeout())
                .max_lifetime(db.max_lifetime())
                .connect(&db.url)
                .await?;
            info!(max_connections = db.max_connections, "database pool ready");

            let catalog = Arc::new(PostgresCatalog::new(pool.clone()));
            Ok(Storage {
                reader: catalog.clone(),
                repository: catalog,
                log: Arc::new(PostgresConversationLog::new(pool.clone())),
                pool: Some(pool),
            })
        }
    }
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
