use trove_api::config::Config;

#[tokio::main]
async fn main() {
    trove_observability::init();

    let config = Config::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let app = match trove_api::app::build_app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!(
        addr = %listener.local_addr().unwrap(),
        data_file = %config.data_file.display(),
        uploads_dir = %config.uploads_dir.display(),
        "listening"
    );

    axum::serve(listener, app).await.unwrap();
}
