use std::collections::VecDeque;

use super::{Policy, admit_arrivals, arrival_order};
use crate::core::{GanttLabel, Process, Ticks, Timeline};

/// Multi-level feedback queue: one FIFO queue per level, each with its own
/// quantum. New arrivals enter level 0; a process that does not finish its
/// slice is demoted one level, bottoming out at the last queue. There is no
/// aging, so long jobs settle at the bottom and can starve behind a steady
/// stream of new arrivals.
pub struct Mlfq {
    pub quantums: Vec<Ticks>,
}

impl Policy for Mlfq {
    fn name(&self) -> &'static str {
        "mlfq"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        debug_assert!(
            !self.quantums.is_empty() && self.quantums.iter().all(|&q| q > 0),
            "quantums validated before dispatch"
        );

        let n = processes.len();
        let levels = self.quantums.len();
        let order = arrival_order(processes);
        let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst_time).collect();
        let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); levels];
        let mut timeline = Timeline::new();
        let mut cursor = 0usize;
        let mut time: Ticks = 0;

        while cursor < n || queues.iter().any(|q| !q.is_empty()) {
            admit_arrivals(processes, &order, &mut cursor, time, &mut queues[0]);

            // Run the head of the highest-priority non-empty queue.
            let mut executed = false;
            for level in 0..levels {
                let Some(idx) = queues[level].pop_front() else {
                    continue;
                };

                processes[idx].mark_started(time);
                let run = self.quantums[level].min(remaining[idx]);
                timeline.push(GanttLabel::Process(processes[idx].pid), time, run);
                time += run;
                remaining[idx] -= run;

                admit_arrivals(processes, &order, &mut cursor, time, &mut queues[0]);

                if remaining[idx] > 0 {
                    // Demotion only; a process never climbs back up.
                    queues[(level + 1).min(levels - 1)].push_back(idx);
                } else {
                    processes[idx].mark_completed(time);
                }

                executed = true;
                break;
            }

            if !executed {
                time += 1;
            }
        }

        timeline
    }
}
