use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yoga_service::auth::credentials::CredentialVerifier;
use yoga_service::auth::identity::UserIdentityLoader;
use yoga_service::auth::service::AuthService;
use yoga_service::config::Config;
use yoga_service::inbound::http::router::create_router;
use yoga_service::inbound::http::router::AppState;
use yoga_service::outbound::repositories::PostgresSessionRepository;
use yoga_service::outbound::repositories::PostgresTeacherRepository;
use yoga_service::outbound::repositories::PostgresUserRepository;
use yoga_service::session::service::SessionService;
use yoga_service::teacher::service::TeacherService;
use yoga_service::user::service::UserService;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yoga_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "yoga-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_ms = config.jwt.expiration_ms,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_ms,
    )?);

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let teacher_repository = Arc::new(PostgresTeacherRepository::new(pg_pool.clone()));
    let session_repository = Arc::new(PostgresSessionRepository::new(pg_pool));

    let identity_loader = Arc::new(UserIdentityLoader::new(Arc::clone(&user_repository)));
    let credential_verifier = Arc::new(CredentialVerifier::new(
        Arc::clone(&identity_loader),
        Arc::clone(&authenticator),
    ));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            credential_verifier,
            Arc::clone(&user_repository),
            Arc::clone(&authenticator),
        )),
        user_service: Arc::new(UserService::new(Arc::clone(&user_repository))),
        teacher_service: Arc::new(TeacherService::new(teacher_repository)),
        session_service: Arc::new(SessionService::new(session_repository, user_repository)),
        identity_loader,
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;
    tracing::info!("Server exited");

    Ok(())
}
