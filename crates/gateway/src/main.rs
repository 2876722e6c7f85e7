use gateway::config::get_configuration;
use gateway::logging::setup_logging;
use gateway::routes::app;
use gateway::state::AppState;

use classifier::Classifier;
use classifier::backend::ort::OrtBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration()?;
    setup_logging(&config);

    tracing::info!(
        model_path = %config.model_path,
        labels_path = %config.labels_path,
        "Loading classification model"
    );
    let classifier = Classifier::<OrtBackend>::load(&config.model_path, &config.labels_path)?;
    tracing::info!("Model loaded successfully");

    let state = AppState::new(classifier);
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Gateway listening");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
