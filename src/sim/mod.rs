pub mod compare;
pub mod driver;
pub mod metrics;
pub mod workload;

pub use compare::{PolicyComparison, compare};
pub use driver::{RunResult, run, simulate, validate_specs};
pub use metrics::Metrics;
