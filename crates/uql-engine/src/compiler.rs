use crate::{config::TranslatorConfig, request::QueryParams};
use uql_syntax::{
    Document,
    ast::{filter::Filter, hint::Hints},
    error::UqlError,
    parser::{parse_filter, parse_hints},
};

/// A trait for compiling parsed filter and hint documents into a
/// backend-native query.
///
/// Compiling never mutates the compiler: every call returns a freshly built
/// query, so one compiler can serve any number of requests.
pub trait QueryCompiler {
    /// The type of query that this compiler produces.
    type Query;

    fn config(&self) -> &TranslatorConfig;

    /// Compile the parsed documents into a query.
    fn compile(&self, filter: &Filter, hints: &Hints) -> Self::Query;

    /// Parse and compile already-decoded documents.
    fn from_params(&self, query: &Document, hint: &Document) -> Result<Self::Query, UqlError> {
        let filter = parse_filter(query)?;
        let hints = parse_hints(hint)?;
        Ok(self.compile(&filter, &hints))
    }

    /// Decode the configured request parameters, then parse and compile.
    fn from_request<P>(&self, params: &P) -> Result<Self::Query, UqlError>
    where
        P: QueryParams + ?Sized,
    {
        let (query, hint) = self.config().request_adapter().decode(params)?;
        self.from_params(&query, &hint)
    }
}
