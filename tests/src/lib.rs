//! Integration tests for the Strider ranges library.
//!
//! The crate-level test files exercise whole pipelines through the public
//! facade; per-module behavior is tested next to the modules themselves.
