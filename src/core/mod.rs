pub mod error;
pub mod observer;
pub mod process;
pub mod timeline;

pub use error::ScheduleError;
pub use process::{Pid, Process, ProcessSpec, ProcessStatus, Ticks};
pub use timeline::{GanttInterval, GanttLabel, Timeline};
