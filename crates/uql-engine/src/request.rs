//! Decodes the filter and hint documents from named request parameters.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};
use uql_syntax::{Document, error::UqlError, parser::parse_document};

use crate::config::{DEFAULT_HINT_PARAM, DEFAULT_QUERY_PARAM};

/// A source of named string parameters, e.g. a decoded query string.
pub trait QueryParams {
    fn param(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> QueryParams for HashMap<String, String, S> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl QueryParams for BTreeMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> QueryParams for [(K, V)] {
    fn param(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestAdapter {
    query_param: String,
    hint_param: String,
}

impl Default for RequestAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_PARAM, DEFAULT_HINT_PARAM)
    }
}

impl RequestAdapter {
    pub fn new(query_param: &str, hint_param: &str) -> Self {
        Self {
            query_param: query_param.to_string(),
            hint_param: hint_param.to_string(),
        }
    }

    /// Returns the `(filter, hint)` documents. A missing parameter decodes
    /// as an empty object; anything that is not a JSON object is rejected.
    pub fn decode<P>(&self, params: &P) -> Result<(Document, Document), UqlError>
    where
        P: QueryParams + ?Sized,
    {
        let query = Self::document(params, &self.query_param)?;
        let hint = Self::document(params, &self.hint_param)?;
        Ok((query, hint))
    }

    fn document<P>(params: &P, name: &str) -> Result<Document, UqlError>
    where
        P: QueryParams + ?Sized,
    {
        let raw = params.param(name).unwrap_or("{}");
        parse_document(raw).map_err(|err| match err {
            UqlError::MalformedInput(msg) => {
                UqlError::MalformedInput(format!("parameter '{name}': {msg}"))
            }
            other => other,
        })
    }
}
