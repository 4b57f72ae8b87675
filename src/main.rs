use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use studyhub::application::ports::{
    CourseRepository, DocumentFetcher, FileStore, TopicRepository, UserRepository,
};
use studyhub::application::services::{AuthService, CourseService, StudyMaterialService};
use studyhub::infrastructure::auth::{Argon2PasswordHasher, JwtTokenService};
use studyhub::infrastructure::fetch::HttpDocumentFetcher;
use studyhub::infrastructure::llm::create_groq_client;
use studyhub::infrastructure::observability::init_tracing;
use studyhub::infrastructure::persistence::{
    InMemoryRepository, PgCourseRepository, PgTopicRepository, PgUserRepository, create_pool,
    run_migrations,
};
use studyhub::infrastructure::storage::LocalFileStore;
use studyhub::infrastructure::text_processing::PdfAdapter;
use studyhub::presentation::{ApiConfig, AppState, Environment, Settings, create_router};

struct Repositories {
    users: Arc<dyn UserRepository>,
    courses: Arc<dyn CourseRepository>,
    topics: Arc<dyn TopicRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.logging, environment);

    let repositories = build_repositories(&settings).await?;

    let file_store: Arc<dyn FileStore> = Arc::new(
        LocalFileStore::new(settings.storage.base_path.clone())
            .context("Failed to open media storage")?,
    );
    let document_fetcher: Arc<dyn DocumentFetcher> = Arc::new(
        HttpDocumentFetcher::new(settings.documents.fetch_timeout())
            .context("Failed to build document fetcher")?,
    );
    let llm_client = Arc::new(
        create_groq_client(&settings.llm).context("Failed to build generation client")?,
    );

    let study_material_service = Arc::new(StudyMaterialService::new(
        llm_client,
        Arc::new(PdfAdapter::new()),
        document_fetcher,
        settings.llm.model.clone(),
        settings.generation.clone(),
    ));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&repositories.users),
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(JwtTokenService::from_settings(&settings.auth)),
    ));

    let course_service = Arc::new(CourseService::new(
        Arc::clone(&repositories.courses),
        Arc::clone(&repositories.topics),
        Arc::clone(&file_store),
    ));

    let state = AppState {
        study_material_service,
        auth_service,
        course_service,
        file_store,
        api_config: ApiConfig::from_settings(&settings),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        public_base_url = %settings.server.public_base_url,
        model = %settings.llm.model,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_repositories(settings: &Settings) -> anyhow::Result<Repositories> {
    if !settings.database.is_configured() {
        tracing::warn!("No database configured, using in-memory repositories");
        let repository = Arc::new(InMemoryRepository::new());
        return Ok(Repositories {
            users: repository.clone(),
            courses: repository.clone(),
            topics: repository,
        });
    }

    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .context("Failed to connect to PostgreSQL")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(Repositories {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        courses: Arc::new(PgCourseRepository::new(pool.clone())),
        topics: Arc::new(PgTopicRepository::new(pool)),
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
