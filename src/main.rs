//! Subway - 地铁线路管理服务
//!
//! - Domain: station/, line/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, persistence

use std::sync::Arc;

use subway::application::{LineRepositoryPort, StationRepositoryPort};
use subway::config::{load_config, print_config, AppConfig, RepositoryBackend};
use subway::infrastructure::http::{AppState, HttpServer, ServerConfig};
use subway::infrastructure::memory::{InMemoryLineRepository, InMemoryStationRepository};
use subway::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteLineRepository, SqliteStationRepository,
};

/// 按配置选择仓储实现
async fn build_repositories(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn LineRepositoryPort>, Arc<dyn StationRepositoryPort>)> {
    match config.database.backend {
        RepositoryBackend::Sqlite => {
            // 确保数据目录存在
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            let line_repo: Arc<dyn LineRepositoryPort> =
                Arc::new(SqliteLineRepository::new(pool.clone()));
            let station_repo: Arc<dyn StationRepositoryPort> =
                Arc::new(SqliteStationRepository::new(pool));
            Ok((line_repo, station_repo))
        }
        RepositoryBackend::Memory => {
            tracing::warn!("Using in-memory repositories, data is lost on shutdown");
            let line_repo: Arc<dyn LineRepositoryPort> = Arc::new(InMemoryLineRepository::new());
            let station_repo: Arc<dyn StationRepositoryPort> =
                Arc::new(InMemoryStationRepository::new());
            Ok((line_repo, station_repo))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.filter())),
        )
        .init();

    tracing::info!("Subway - 地铁线路管理服务");
    print_config(&config);

    let (line_repo, station_repo) = build_repositories(&config).await?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(line_repo, station_repo);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
