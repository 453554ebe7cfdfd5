use serde::{Deserialize, Serialize};

pub type Pid = u64;
pub type Ticks = u64;

/// Static description of a process, as supplied by the caller.
///
/// Lower `priority` values mean higher scheduling priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    #[serde(default)]
    pub priority: i64,
}

/// Scheduling state of a process, tracked per engine alongside the record
/// itself rather than by scanning membership lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Pending,
    Ready,
    Running,
    Done,
}

/// A simulated process. Engines mutate `start_time` and `completion_time` in
/// place during a run; everything else is read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

impl Process {
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            pid: spec.pid,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            start_time: None,
            completion_time: None,
        }
    }

    /// Record the first dispatch. Later dispatches leave `start_time` alone.
    pub fn mark_started(&mut self, now: Ticks) {
        debug_assert!(
            now >= self.arrival_time,
            "process {} started before it arrived",
            self.pid
        );
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Record completion. Set exactly once, when remaining work hits zero.
    pub fn mark_completed(&mut self, now: Ticks) {
        debug_assert!(
            self.completion_time.is_none(),
            "process {} completed twice",
            self.pid
        );
        debug_assert!(
            self.start_time.is_some_and(|start| start <= now),
            "process {} completed before it started",
            self.pid
        );
        self.completion_time = Some(now);
    }

    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Completion minus arrival. `None` until the process completes.
    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.completion_time.map(|ct| ct - self.arrival_time)
    }

    /// Turnaround minus burst. `None` until the process completes.
    pub fn waiting_time(&self) -> Option<Ticks> {
        self.turnaround_time().map(|tat| tat - self.burst_time)
    }
}
