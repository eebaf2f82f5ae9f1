pub mod asset;
pub mod config;
pub mod error;
pub mod logging;
pub mod responder;
pub mod types;

pub use config::{ReadFailurePolicy, ResponderConfig};
pub use error::{AssetError, ConfigError};
pub use logging::{InvocationLog, TracingLog};
#[cfg(any(test, feature = "testing"))]
pub use logging::RecordingLog;
pub use responder::ImageResponder;
pub use types::ResponseEnvelope;
