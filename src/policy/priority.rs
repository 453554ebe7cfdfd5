use super::{Policy, run_to_completion};
use crate::core::{Process, Timeline};

/// Non-preemptive priority scheduling: among ready processes, the lowest
/// priority value runs to completion, even if a higher-priority process
/// arrives mid-burst. Equal priorities resolve in admission order.
pub struct Priority;

impl Policy for Priority {
    fn name(&self) -> &'static str {
        "priority"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        run_to_completion(processes, |p| p.priority)
    }
}
