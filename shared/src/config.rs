use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_IMAGE_PATH: &str = "./images/aws.png";
pub const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// What the responder returns when the asset cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFailurePolicy {
    /// 200 with no body, still flagged as base64
    #[default]
    AlwaysOk,
    /// 500 with a JSON error body
    ServerError,
}

impl FromStr for ReadFailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" => Ok(Self::AlwaysOk),
            "error" => Ok(Self::ServerError),
            _ => Err(ConfigError::UnknownFailurePolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderConfig {
    pub image_path: PathBuf,
    pub content_type: String,
    pub failure_policy: ReadFailurePolicy,
}

impl ResponderConfig {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            failure_policy: ReadFailurePolicy::default(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: ReadFailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Read IMAGE_PATH, IMAGE_CONTENT_TYPE and ON_READ_FAILURE
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let image_path = lookup("IMAGE_PATH").unwrap_or_else(|| DEFAULT_IMAGE_PATH.to_string());
        if image_path.trim().is_empty() {
            return Err(ConfigError::Empty("IMAGE_PATH"));
        }

        let content_type =
            lookup("IMAGE_CONTENT_TYPE").unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
        if content_type.trim().is_empty() {
            return Err(ConfigError::Empty("IMAGE_CONTENT_TYPE"));
        }

        let failure_policy = match lookup("ON_READ_FAILURE") {
            Some(value) => value.parse()?,
            None => ReadFailurePolicy::default(),
        };

        Ok(Self::new(image_path)
            .with_content_type(content_type)
            .with_failure_policy(failure_policy))
    }
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_PATH)
    }
}
