use super::Policy;
use crate::core::{GanttLabel, Process, Ticks, Timeline};

/// Shortest remaining time first, the preemptive variant of SJF. The ready
/// set is re-evaluated every tick, so a new arrival with less remaining work
/// preempts the running process immediately. Consecutive ticks of the same
/// process coalesce into one interval, and idle ticks are recorded
/// explicitly.
pub struct Srtf;

impl Policy for Srtf {
    fn name(&self) -> &'static str {
        "srtf"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        let n = processes.len();
        let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst_time).collect();
        let mut timeline = Timeline::new();
        let mut time: Ticks = 0;
        let mut completed = 0usize;

        while completed < n {
            // Scan in input order and replace only on a strictly smaller
            // remaining time, so ties stick with the earlier-listed process.
            let mut current: Option<usize> = None;
            for idx in 0..n {
                if processes[idx].arrival_time > time || remaining[idx] == 0 {
                    continue;
                }
                if current.is_none_or(|cur| remaining[idx] < remaining[cur]) {
                    current = Some(idx);
                }
            }

            match current {
                Some(idx) => {
                    processes[idx].mark_started(time);
                    timeline.push(GanttLabel::Process(processes[idx].pid), time, 1);
                    remaining[idx] -= 1;
                    if remaining[idx] == 0 {
                        processes[idx].mark_completed(time + 1);
                        completed += 1;
                    }
                }
                None => timeline.push(GanttLabel::Idle, time, 1),
            }

            time += 1;
        }

        timeline
    }
}
