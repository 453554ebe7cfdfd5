pub mod fifo;
pub mod mlfq;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

use std::cmp::Ordering;
use std::collections::VecDeque;

use keyed_priority_queue::KeyedPriorityQueue;

use crate::core::{GanttLabel, Process, ProcessStatus, ScheduleError, Ticks, Timeline};

pub use fifo::Fifo;
pub use mlfq::Mlfq;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

/// A scheduling policy. `schedule` runs the whole simulation to completion
/// in one call, setting start and completion times on the process records in
/// place and returning the execution timeline.
pub trait Policy {
    fn name(&self) -> &'static str;

    fn schedule(&self, processes: &mut [Process]) -> Timeline;
}

/// Policy selector plus its parameters, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyKind {
    Fifo,
    RoundRobin { quantum: Ticks },
    Mlfq { quantums: Vec<Ticks> },
    Priority,
    Sjf,
    Srtf,
}

impl PolicyKind {
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::RoundRobin { .. } => "round-robin",
            PolicyKind::Mlfq { .. } => "mlfq",
            PolicyKind::Priority => "priority",
            PolicyKind::Sjf => "sjf",
            PolicyKind::Srtf => "srtf",
        }
    }

    /// Reject bad parameters before any simulation state is built.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self {
            PolicyKind::RoundRobin { quantum } if *quantum == 0 => {
                Err(ScheduleError::InvalidQuantum { quantum: *quantum })
            }
            PolicyKind::Mlfq { quantums } => {
                if quantums.is_empty() {
                    return Err(ScheduleError::NoQuantumLevels);
                }
                match quantums.iter().position(|&q| q == 0) {
                    Some(level) => Err(ScheduleError::InvalidLevelQuantum { level }),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    pub fn to_policy(&self) -> Box<dyn Policy> {
        match self {
            PolicyKind::Fifo => Box::new(Fifo),
            PolicyKind::RoundRobin { quantum } => Box::new(RoundRobin { quantum: *quantum }),
            PolicyKind::Mlfq { quantums } => Box::new(Mlfq {
                quantums: quantums.clone(),
            }),
            PolicyKind::Priority => Box::new(Priority),
            PolicyKind::Sjf => Box::new(Sjf),
            PolicyKind::Srtf => Box::new(Srtf),
        }
    }
}

/// Process indices sorted by arrival time. The stable sort keeps input order
/// for simultaneous arrivals.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);
    order
}

/// Admit every process that has arrived by `now`, in arrival order, onto the
/// tail of `queue`. `cursor` tracks how far into `order` admission has gone.
pub(crate) fn admit_arrivals(
    processes: &[Process],
    order: &[usize],
    cursor: &mut usize,
    now: Ticks,
    queue: &mut VecDeque<usize>,
) {
    while *cursor < order.len() && processes[order[*cursor]].arrival_time <= now {
        queue.push_back(order[*cursor]);
        *cursor += 1;
    }
}

/// Ready-queue ordering for the non-preemptive policies: the policy's
/// comparison key, with the admission sequence number as a stable tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReadyKey<K> {
    pub key: K,
    pub seq: u64,
}

// KeyedPriorityQueue pops its maximum entry, so the ordering is flipped to
// surface the smallest (key, seq) pair first.
impl<K: Ord> Ord for ReadyKey<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K: Ord> PartialOrd for ReadyKey<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shared loop for the non-preemptive policies: admit arrivals into a
/// min-ordered ready queue, always run the smallest key to completion in a
/// single interval, and step one tick forward whenever nothing is ready.
pub(crate) fn run_to_completion<K: Ord>(
    processes: &mut [Process],
    key_of: impl Fn(&Process) -> K,
) -> Timeline {
    let order = arrival_order(processes);
    let mut status = vec![ProcessStatus::Pending; processes.len()];
    let mut ready: KeyedPriorityQueue<usize, ReadyKey<K>> = KeyedPriorityQueue::new();
    let mut timeline = Timeline::new();
    let mut cursor = 0usize;
    let mut seq = 0u64;
    let mut time: Ticks = 0;
    let mut completed = 0usize;

    while completed < processes.len() {
        while cursor < order.len() && processes[order[cursor]].arrival_time <= time {
            let idx = order[cursor];
            ready.push(
                idx,
                ReadyKey {
                    key: key_of(&processes[idx]),
                    seq,
                },
            );
            status[idx] = ProcessStatus::Ready;
            seq += 1;
            cursor += 1;
        }

        let Some((idx, _)) = ready.pop() else {
            time += 1;
            continue;
        };

        debug_assert_eq!(
            status[idx],
            ProcessStatus::Ready,
            "dispatching a process that is not ready"
        );
        status[idx] = ProcessStatus::Running;

        let burst = processes[idx].burst_time;
        processes[idx].mark_started(time);
        timeline.push(GanttLabel::Process(processes[idx].pid), time, burst);
        time += burst;
        processes[idx].mark_completed(time);
        status[idx] = ProcessStatus::Done;
        completed += 1;
    }

    timeline
}
