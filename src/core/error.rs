use thiserror::Error;

use super::process::{Pid, Ticks};

/// Rejections raised before a simulation starts. Anything that goes wrong
/// mid-run is an engine bug and is handled by assertions, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("process {pid} has a zero burst time")]
    ZeroBurst { pid: Pid },

    #[error("duplicate process id {pid}")]
    DuplicatePid { pid: Pid },

    #[error("time quantum must be positive, got {quantum}")]
    InvalidQuantum { quantum: Ticks },

    #[error("mlfq needs at least one queue level")]
    NoQuantumLevels,

    #[error("mlfq level {level} has a zero quantum")]
    InvalidLevelQuantum { level: usize },

    #[error("unknown policy {name:?}")]
    UnknownPolicy { name: String },
}
