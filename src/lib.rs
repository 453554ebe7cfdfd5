pub mod core;
pub mod policy;
pub mod sim;

pub use crate::core::{
    GanttInterval, GanttLabel, Pid, Process, ProcessSpec, ScheduleError, Ticks, Timeline,
};
pub use policy::{Policy, PolicyKind};
pub use sim::{Metrics, PolicyComparison, RunResult, compare, run};
