pub mod compare;

pub use compare::{BenchmarkSelectionParams, BenchmarkSelectionTool};
