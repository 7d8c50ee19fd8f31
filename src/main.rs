//! modinfo - 课程模块信息 JSON API
//!
//! 启动流程：配置 -> 日志 -> 数据库 -> 仓储 -> HTTP 服务器

use std::sync::Arc;

use modinfo::config::{load_config, print_config, LogConfig};
use modinfo::infrastructure::http::{AppState, HttpServer, ServerConfig};
use modinfo::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteModuleInfoRepository,
};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},modinfo={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("modinfo - module info API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
        acquire_timeout_secs: config.database.acquire_timeout_secs,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let module_repo = Arc::new(SqliteModuleInfoRepository::new(pool));

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_request_timeout(config.server.request_timeout());
    let state = AppState::new(module_repo, config.server.env.clone())
        .with_max_body_bytes(config.server.max_body_bytes);

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
