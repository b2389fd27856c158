use anyhow::Result;
use loteria_api::{
    application::{ports::security::TokenManager, services::ApplicationServices},
    config::AppConfig,
    domain::participant::{ParticipantReadRepository, ParticipantWriteRepository},
    infrastructure::{
        database,
        repositories::{PostgresParticipantReadRepository, PostgresParticipantWriteRepository},
        security::token::JwtTokenManager,
    },
    presentation::http::{routes::build_router_with_config, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let read_repo: Arc<dyn ParticipantReadRepository> =
        Arc::new(PostgresParticipantReadRepository::new(pool.clone()));
    let write_repo: Arc<dyn ParticipantWriteRepository> =
        Arc::new(PostgresParticipantWriteRepository::new(pool));

    let token_manager_impl = JwtTokenManager::new(config.jwt_secret(), config.token_ttl())?
        .with_issuer(config.jwt_issuer().map(ToString::to_string))
        .with_audience(config.jwt_audience().map(ToString::to_string));
    let token_manager: Arc<dyn TokenManager> = Arc::new(token_manager_impl);

    let services = Arc::new(ApplicationServices::new(
        read_repo,
        write_repo,
        token_manager,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_config(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
