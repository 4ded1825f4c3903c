//! Benchmarks for the Strider ranges library.
//!
//! The interesting comparisons are against the standard iterator adaptors on
//! the same workloads: lazy cursor pipelines are supposed to optimize down to
//! the same loops, and the checked/unchecked split is supposed to be the only
//! measurable policy cost. See `benches/pipeline_benchmarks.rs`.
