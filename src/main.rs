use std::fmt::Display;
use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::{error, info, warn};

use ironlog::logging::{init_tracing, shutdown_tracer};
use ironlog::metrics::{init_metrics, metrics_app};
use ironlog::router::init_router;
use ironlog::state::init_app_state;
use ironlog_config::ServerConfig;

fn fail(context: &str, err: impl Display) -> ! {
    eprintln!("❌ {}: {}", context, err);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = init_tracing() {
        fail("Failed to initialize logging", e);
    }

    let server_config = ServerConfig::from_env();

    match init_metrics() {
        Ok(Some(handle)) => {
            let addr = SocketAddr::from(([0, 0, 0, 0], server_config.metrics_port));
            tokio::spawn(async move {
                match tokio::net::TcpListener::bind(addr).await {
                    Ok(listener) => {
                        info!(%addr, "Metrics exporter listening");
                        if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                            error!(error = %e, "Metrics server stopped");
                        }
                    }
                    Err(e) => warn!(error = %e, %addr, "Metrics exporter could not bind"),
                }
            });
        }
        Ok(None) => info!("Observability disabled, metrics exporter not started"),
        Err(e) => warn!(error = %e, "Failed to install metrics recorder"),
    }

    let state = match init_app_state().await {
        Ok(state) => state,
        Err(e) => fail("Failed to connect to database", e),
    };

    if let Err(e) = ironlog_db::run_migrations(&state.db).await {
        fail("Failed to run migrations", e);
    }

    if let Err(e) = tokio::fs::create_dir_all(&state.storage_config.upload_dir).await {
        fail("Failed to create upload directory", e);
    }

    let app = init_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => fail(&format!("Failed to bind {}", addr), e),
    };

    info!(%addr, "Server running");
    println!("🚀 Server running on http://localhost:{}", server_config.port);
    println!(
        "📚 Swagger UI available at http://localhost:{}/swagger-ui",
        server_config.port
    );
    println!(
        "📖 Scalar UI available at http://localhost:{}/scalar",
        server_config.port
    );

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    });

    if let Err(e) = server.await {
        error!(error = %e, "Server error");
    }

    shutdown_tracer();
}
