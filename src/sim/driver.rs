use log::debug;
use rustc_hash::FxHashSet;

use crate::core::{Process, ProcessSpec, ScheduleError, Timeline, observer};
use crate::policy::PolicyKind;

/// Outcome of a single run: the execution timeline plus the process records
/// it annotated. Produced fresh per call; nothing is retained between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub timeline: Timeline,
    pub processes: Vec<Process>,
}

/// Reject malformed process sets before any simulation state is built. An
/// empty set is valid degenerate input.
pub fn validate_specs(specs: &[ProcessSpec]) -> Result<(), ScheduleError> {
    let mut seen = FxHashSet::default();
    for spec in specs {
        if spec.burst_time == 0 {
            return Err(ScheduleError::ZeroBurst { pid: spec.pid });
        }
        if !seen.insert(spec.pid) {
            return Err(ScheduleError::DuplicatePid { pid: spec.pid });
        }
    }
    Ok(())
}

/// Run `kind` over an already-validated process set, mutating the records in
/// place and returning the execution timeline.
pub fn simulate(kind: &PolicyKind, processes: &mut [Process]) -> Result<Timeline, ScheduleError> {
    kind.validate()?;
    let policy = kind.to_policy();
    debug!(
        "running {} over {} processes",
        policy.name(),
        processes.len()
    );
    let timeline = policy.schedule(processes);
    observer::verify_run(&timeline, processes);
    Ok(timeline)
}

/// Build fresh process records from `specs` and run `kind` to completion.
/// Every call owns its working state, so repeated runs over the same specs
/// are independent of each other.
pub fn run(kind: &PolicyKind, specs: &[ProcessSpec]) -> Result<RunResult, ScheduleError> {
    validate_specs(specs)?;
    let mut processes: Vec<Process> = specs.iter().map(Process::from_spec).collect();
    let timeline = simulate(kind, &mut processes)?;
    Ok(RunResult {
        timeline,
        processes,
    })
}
