use super::{Policy, run_to_completion};
use crate::core::{Process, Timeline};

/// Non-preemptive shortest job first: among ready processes, the smallest
/// burst runs to completion. Equal bursts resolve in admission order.
pub struct Sjf;

impl Policy for Sjf {
    fn name(&self) -> &'static str {
        "sjf"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        run_to_completion(processes, |p| p.burst_time)
    }
}
