use super::{Policy, arrival_order};
use crate::core::{GanttLabel, Process, Timeline};

/// First-in-first-out: dispatch in arrival order, each process runs its
/// whole burst in one interval.
pub struct Fifo;

impl Policy for Fifo {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut now = 0;

        for idx in arrival_order(processes) {
            let process = &mut processes[idx];
            // Idle until the next process arrives.
            now = now.max(process.arrival_time);
            process.mark_started(now);
            timeline.push(GanttLabel::Process(process.pid), now, process.burst_time);
            now += process.burst_time;
            process.mark_completed(now);
        }

        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ticks;

    fn procs(data: &[(u64, Ticks, Ticks)]) -> Vec<Process> {
        data.iter()
            .map(|&(pid, arrival_time, burst_time)| Process {
                pid,
                arrival_time,
                burst_time,
                priority: 0,
                start_time: None,
                completion_time: None,
            })
            .collect()
    }

    fn intervals(timeline: &Timeline) -> Vec<(GanttLabel, Ticks, Ticks)> {
        timeline
            .intervals()
            .iter()
            .map(|iv| (iv.label, iv.start, iv.end))
            .collect()
    }

    #[test]
    fn test_fifo_runs_in_arrival_order() {
        let mut processes = procs(&[(1, 0, 8), (2, 1, 4), (3, 2, 9)]);
        let timeline = Fifo.schedule(&mut processes);

        assert_eq!(
            intervals(&timeline),
            vec![
                (GanttLabel::Process(1), 0, 8),
                (GanttLabel::Process(2), 8, 12),
                (GanttLabel::Process(3), 12, 21),
            ]
        );
        let waits: Vec<_> = processes.iter().map(|p| p.waiting_time()).collect();
        assert_eq!(waits, vec![Some(0), Some(7), Some(10)]);
    }

    #[test]
    fn test_fifo_skips_idle_gap() {
        let mut processes = procs(&[(1, 0, 2), (2, 5, 3)]);
        let timeline = Fifo.schedule(&mut processes);

        assert_eq!(processes[1].start_time, Some(5));
        assert_eq!(processes[1].completion_time, Some(8));
        assert_eq!(timeline.busy_ticks(), 5);
        assert_eq!(timeline.end_time(), Some(8));
    }

    #[test]
    fn test_fifo_simultaneous_arrivals_keep_input_order() {
        let mut processes = procs(&[(7, 0, 3), (3, 0, 2)]);
        let timeline = Fifo.schedule(&mut processes);

        assert_eq!(
            intervals(&timeline),
            vec![(GanttLabel::Process(7), 0, 3), (GanttLabel::Process(3), 3, 5)]
        );
    }
}
