use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid translator config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Parameter name for {0} must not be empty")]
    EmptyParamName(&'static str),

    #[error("Filter and hint parameters must differ, both are '{0}'")]
    DuplicateParamName(String),
}
