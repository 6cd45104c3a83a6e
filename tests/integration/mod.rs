//! Integration tests with mock HTTP server

pub mod error_handling;
pub mod namespaces;
pub mod search;
pub mod vectors;
