use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use retrieve_image_shared::{ImageResponder, ResponderConfig};
use serde_json::Value;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    // Configuration is resolved once per container
    let config = ResponderConfig::from_env()?;
    tracing::info!(
        "🖼️ Retrieve image Lambda starting - path: {} content-type: {} on-failure: {:?}",
        config.image_path.display(),
        config.content_type,
        config.failure_policy
    );
    let responder = ImageResponder::with_tracing(config);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let responder = Arc::clone(&responder);
        async move { handler::function_handler(event, responder).await }
    }))
    .await
}
