//! Parser tests
//!
//! These tests verify that filter and hint documents decoded from raw
//! request strings are parsed into the expected typed trees.

mod filters;
