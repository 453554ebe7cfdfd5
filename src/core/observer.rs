use rustc_hash::FxHashMap;

use super::process::{Pid, Process, Ticks};
use super::timeline::{GanttLabel, Timeline};

/// Post-run invariant checks. A violation here means the engine itself is
/// broken, so everything is a debug assertion rather than a recoverable
/// error.
pub fn verify_run(timeline: &Timeline, processes: &[Process]) {
    let mut prev_end: Ticks = 0;
    for interval in timeline.intervals() {
        debug_assert!(
            interval.end > interval.start,
            "empty interval at {}",
            interval.start
        );
        debug_assert!(
            interval.start >= prev_end,
            "interval at {} overlaps the previous one",
            interval.start
        );
        prev_end = interval.end;
    }

    let mut service: FxHashMap<Pid, Ticks> = FxHashMap::default();
    for interval in timeline.intervals() {
        if let GanttLabel::Process(pid) = interval.label {
            *service.entry(pid).or_insert(0) += interval.len();
        }
    }

    for process in processes {
        debug_assert!(
            process.completion_time.is_some(),
            "process {} never completed",
            process.pid
        );

        if let (Some(start), Some(completion)) = (process.start_time, process.completion_time) {
            debug_assert!(
                process.arrival_time <= start,
                "process {} started before it arrived",
                process.pid
            );
            debug_assert!(
                start <= completion,
                "process {} completed before it started",
                process.pid
            );
            debug_assert!(
                completion - process.arrival_time >= process.burst_time,
                "process {} finished with negative waiting time",
                process.pid
            );
        }

        debug_assert_eq!(
            service.get(&process.pid).copied().unwrap_or(0),
            process.burst_time,
            "dispatched run lengths for process {} do not cover its burst",
            process.pid
        );
    }
}
