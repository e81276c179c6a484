use std::sync::Arc;

use hello_routes::config::{AppState, Config};
use hello_routes::routing::RouteTable;
use hello_routes::{app, logger, server, AppError, AppResult};

/// Config file used when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config";

fn main() -> AppResult<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Route table is complete before any traffic is served
    let routes = app::build_route_table()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, routes))
}

async fn async_main(cfg: Config, routes: RouteTable) -> AppResult<()> {
    let addr = cfg.socket_addr().map_err(AppError::Address)?;
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&listener.local_addr()?, &cfg, &routes);

    let state = Arc::new(AppState::new(cfg, routes));
    server::run(listener, state, server::shutdown_signal()).await;
    Ok(())
}
