use serde_json::Value;
use sql_builder::{ast::select::Select, builder::select::SelectBuilder, table_ref};
use tracing_subscriber::EnvFilter;
use uql_syntax::Document;

/// Installs a test subscriber once; `RUST_LOG=debug` shows compiler logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object fixture, got {other}"),
    }
}

/// `SELECT * FROM "test"`
pub fn base_select() -> Select {
    SelectBuilder::new().from(table_ref!("test")).build()
}
