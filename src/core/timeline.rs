use std::fmt;

use super::process::{Pid, Ticks};

/// What the CPU was doing over an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GanttLabel {
    Process(Pid),
    Idle,
}

impl fmt::Display for GanttLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GanttLabel::Process(pid) => write!(f, "P{pid}"),
            GanttLabel::Idle => write!(f, "Idle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GanttInterval {
    pub label: GanttLabel,
    pub start: Ticks,
    pub end: Ticks,
}

impl GanttInterval {
    pub fn len(&self) -> Ticks {
        self.end - self.start
    }
}

/// Time-ordered, non-overlapping sequence of execution intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    intervals: Vec<GanttInterval>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run of `len` ticks for `label` starting at `start`.
    ///
    /// When the label matches the last interval and the run begins exactly
    /// where that interval ended, the last interval is extended instead of a
    /// new one being appended.
    pub fn push(&mut self, label: GanttLabel, start: Ticks, len: Ticks) {
        debug_assert!(len > 0, "zero-length interval at {start}");
        if let Some(last) = self.intervals.last_mut() {
            debug_assert!(
                start >= last.end,
                "interval at {start} overlaps the previous one"
            );
            if last.label == label && last.end == start {
                last.end += len;
                return;
            }
        }
        self.intervals.push(GanttInterval {
            label,
            start,
            end: start + len,
        });
    }

    pub fn intervals(&self) -> &[GanttInterval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// End of the last interval, counting from tick 0.
    pub fn end_time(&self) -> Option<Ticks> {
        self.intervals.last().map(|interval| interval.end)
    }

    /// Total ticks spent running processes (idle intervals excluded).
    pub fn busy_ticks(&self) -> Ticks {
        self.intervals
            .iter()
            .filter(|interval| interval.label != GanttLabel::Idle)
            .map(GanttInterval::len)
            .sum()
    }
}
