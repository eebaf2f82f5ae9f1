use lambda_runtime::{Error, LambdaEvent};
use retrieve_image_shared::{ImageResponder, ResponseEnvelope};
use serde_json::Value;
use std::sync::Arc;

/// Lambda entry point - always answers with the configured image
pub(crate) async fn function_handler(
    event: LambdaEvent<Value>,
    responder: Arc<ImageResponder>,
) -> Result<ResponseEnvelope, Error> {
    tracing::debug!("Retrieve image invoked - request id: {}", event.context.request_id);

    Ok(responder.handle(&event.payload).await)
}
