use std::collections::VecDeque;

use super::{Policy, admit_arrivals, arrival_order};
use crate::core::{GanttLabel, Process, Ticks, Timeline};

/// Round robin: a FIFO ready queue where each dispatch runs for at most one
/// quantum. Processes that arrive during a slice join the queue ahead of the
/// preempted process.
pub struct RoundRobin {
    pub quantum: Ticks,
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "round-robin"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        debug_assert!(self.quantum > 0, "quantum validated before dispatch");

        let n = processes.len();
        let order = arrival_order(processes);
        let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst_time).collect();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut cursor = 0usize;
        let mut time: Ticks = 0;

        while cursor < n || !queue.is_empty() {
            admit_arrivals(processes, &order, &mut cursor, time, &mut queue);

            let Some(idx) = queue.pop_front() else {
                time += 1;
                continue;
            };

            debug_assert!(remaining[idx] > 0, "dispatched a finished process");
            processes[idx].mark_started(time);
            let run = self.quantum.min(remaining[idx]);
            timeline.push(GanttLabel::Process(processes[idx].pid), time, run);
            time += run;
            remaining[idx] -= run;

            // Arrivals during the slice go ahead of the preempted process.
            admit_arrivals(processes, &order, &mut cursor, time, &mut queue);

            if remaining[idx] > 0 {
                queue.push_back(idx);
            } else {
                processes[idx].mark_completed(time);
            }
        }

        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_round_robin_alternates_on_quantum() {
        let mut processes = procs(&[(1, 0, 4), (2, 1, 5)]);
        let timeline = RoundRobin { quantum: 2 }.schedule(&mut processes);

        assert_eq!(
            intervals(&timeline),
            vec![
                (GanttLabel::Process(1), 0, 2),
                (GanttLabel::Process(2), 2, 4),
                (GanttLabel::Process(1), 4, 6),
                (GanttLabel::Process(2), 6, 9),
            ]
        );
        assert_eq!(processes[0].completion_time, Some(6));
        assert_eq!(processes[1].completion_time, Some(9));
    }

    #[test]
    fn test_mid_slice_arrival_queued_ahead_of_preempted() {
        // P2 arrives while P1's first slice is running, so it must run
        // before P1's second slice.
        let mut processes = procs(&[(1, 0, 6), (2, 2, 3)]);
        let timeline = RoundRobin { quantum: 3 }.schedule(&mut processes);

        assert_eq!(
            intervals(&timeline),
            vec![
                (GanttLabel::Process(1), 0, 3),
                (GanttLabel::Process(2), 3, 6),
                (GanttLabel::Process(1), 6, 9),
            ]
        );
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let mut processes = procs(&[(1, 4, 2)]);
        let timeline = RoundRobin { quantum: 2 }.schedule(&mut processes);

        assert_eq!(intervals(&timeline), vec![(GanttLabel::Process(1), 4, 6)]);
        assert_eq!(processes[0].waiting_time(), Some(0));
    }

    #[test]
    fn test_solo_process_slices_coalesce() {
        let mut processes = procs(&[(1, 0, 5)]);
        let timeline = RoundRobin { quantum: 2 }.schedule(&mut processes);

        // Back-to-back slices of the same process merge into one interval.
        assert_eq!(intervals(&timeline), vec![(GanttLabel::Process(1), 0, 5)]);
        assert_eq!(processes[0].completion_time, Some(5));
    }
}
