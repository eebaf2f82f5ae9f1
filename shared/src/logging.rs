use crate::error::AssetError;
use crate::types::ResponseEnvelope;

/// Where the responder reports what happened during an invocation
pub trait InvocationLog: Send + Sync {
    /// Called once when the asset could not be read
    fn asset_read_failed(&self, error: &AssetError);

    /// Called once per invocation with the envelope about to be returned
    fn response_built(&self, envelope: &ResponseEnvelope);
}

/// Forwards to whatever `tracing` subscriber the binary installed
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl InvocationLog for TracingLog {
    fn asset_read_failed(&self, error: &AssetError) {
        tracing::error!("❌ {}", error);
    }

    fn response_built(&self, envelope: &ResponseEnvelope) {
        match serde_json::to_string(envelope) {
            Ok(json) => tracing::info!(status = envelope.status_code, "Response: {}", json),
            Err(e) => tracing::info!(
                status = envelope.status_code,
                "Response: {:?} (not serializable: {})",
                envelope,
                e
            ),
        }
    }
}

/// Keeps every emission in memory
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct RecordingLog {
    failures: std::sync::Mutex<Vec<String>>,
    responses: std::sync::Mutex<Vec<ResponseEnvelope>>,
}

#[cfg(any(test, feature = "testing"))]
impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().map(|f| f.clone()).unwrap_or_default()
    }

    pub fn responses(&self) -> Vec<ResponseEnvelope> {
        self.responses.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[cfg(any(test, feature = "testing"))]
impl InvocationLog for RecordingLog {
    fn asset_read_failed(&self, error: &AssetError) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(error.to_string());
        }
    }

    fn response_built(&self, envelope: &ResponseEnvelope) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push(envelope.clone());
        }
    }
}
