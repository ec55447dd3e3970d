//! Benchmark support crate. All content lives in `benches/`.

#![forbid(unsafe_code)]
