use crate::asset;
use crate::config::{ReadFailurePolicy, ResponderConfig};
use crate::logging::{InvocationLog, TracingLog};
use crate::types::ResponseEnvelope;
use serde_json::Value;
use std::sync::Arc;

const ERROR_CONTENT_TYPE: &str = "application/json";

/// Serves the configured image as a base64 API Gateway response
pub struct ImageResponder {
    config: ResponderConfig,
    log: Arc<dyn InvocationLog>,
}

impl ImageResponder {
    pub fn new(config: ResponderConfig, log: Arc<dyn InvocationLog>) -> Arc<Self> {
        Arc::new(Self { config, log })
    }

    /// Responder that logs through `tracing`
    pub fn with_tracing(config: ResponderConfig) -> Arc<Self> {
        Self::new(config, Arc::new(TracingLog))
    }

    /// Build the response for one invocation. The event is not inspected.
    pub async fn handle(&self, _event: &Value) -> ResponseEnvelope {
        let envelope = match asset::load_base64(&self.config.image_path).await {
            Ok(body) => self.image_response(Some(body)),
            Err(e) => {
                self.log.asset_read_failed(&e);
                match self.config.failure_policy {
                    ReadFailurePolicy::AlwaysOk => self.image_response(None),
                    ReadFailurePolicy::ServerError => Self::error_response(),
                }
            }
        };

        self.log.response_built(&envelope);
        envelope
    }

    fn image_response(&self, body: Option<String>) -> ResponseEnvelope {
        ResponseEnvelope {
            headers: ResponseEnvelope::cors_headers(&self.config.content_type),
            status_code: 200,
            body,
            is_base64_encoded: true,
        }
    }

    fn error_response() -> ResponseEnvelope {
        ResponseEnvelope {
            headers: ResponseEnvelope::cors_headers(ERROR_CONTENT_TYPE),
            status_code: 500,
            body: Some(serde_json::json!({"error": "image unavailable"}).to_string()),
            is_base64_encoded: false,
        }
    }
}
