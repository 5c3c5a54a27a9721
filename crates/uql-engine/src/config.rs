use crate::{error::ConfigError, request::RequestAdapter};
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUERY_PARAM: &str = "q";
pub const DEFAULT_HINT_PARAM: &str = "h";

/// Whether a `$bt` range includes its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetweenBounds {
    /// `lower <= field <= upper`
    Inclusive,
    /// `lower < field < upper`
    Exclusive,
}

/// Configuration shared by the request adapter and both compilers.
///
/// The `$bt` defaults differ per backend: the search backend has always
/// emitted an exclusive range and the relational backend an inclusive one.
///
/// Parameter names are validated on every path that sets them (JSON
/// loading included), so a config value always yields a usable adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct TranslatorConfig {
    query_param: String,
    hint_param: String,

    /// `$bt` bounds on the search backend
    pub search_between: BetweenBounds,

    /// `$bt` bounds on the relational backend
    pub relational_between: BetweenBounds,
}

/// Unvalidated on-disk shape of [`TranslatorConfig`].
#[derive(Deserialize)]
#[serde(default)]
struct ConfigFile {
    query_param: String,
    hint_param: String,
    search_between: BetweenBounds,
    relational_between: BetweenBounds,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let TranslatorConfig {
            query_param,
            hint_param,
            search_between,
            relational_between,
        } = TranslatorConfig::default();
        ConfigFile {
            query_param,
            hint_param,
            search_between,
            relational_between,
        }
    }
}

impl TryFrom<ConfigFile> for TranslatorConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let config = TranslatorConfig {
            query_param: file.query_param,
            hint_param: file.hint_param,
            search_between: file.search_between,
            relational_between: file.relational_between,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            hint_param: DEFAULT_HINT_PARAM.to_string(),
            search_between: BetweenBounds::Exclusive,
            relational_between: BetweenBounds::Inclusive,
        }
    }
}

impl TranslatorConfig {
    /// Loads a config from JSON; missing keys keep their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(source)?;
        Self::try_from(file)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.query_param.is_empty() {
            return Err(ConfigError::EmptyParamName("the filter document"));
        }
        if self.hint_param.is_empty() {
            return Err(ConfigError::EmptyParamName("the hint document"));
        }
        if self.query_param == self.hint_param {
            return Err(ConfigError::DuplicateParamName(self.query_param.clone()));
        }
        Ok(())
    }

    /// Request parameter holding the filter document
    pub fn query_param(&self) -> &str {
        &self.query_param
    }

    /// Request parameter holding the hint document
    pub fn hint_param(&self) -> &str {
        &self.hint_param
    }

    pub fn with_query_param(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        self.query_param = name.into();
        self.validate()?;
        Ok(self)
    }

    pub fn with_hint_param(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        self.hint_param = name.into();
        self.validate()?;
        Ok(self)
    }

    pub fn with_search_between(mut self, bounds: BetweenBounds) -> Self {
        self.search_between = bounds;
        self
    }

    pub fn with_relational_between(mut self, bounds: BetweenBounds) -> Self {
        self.relational_between = bounds;
        self
    }

    pub fn request_adapter(&self) -> RequestAdapter {
        RequestAdapter::new(&self.query_param, &self.hint_param)
    }
}
