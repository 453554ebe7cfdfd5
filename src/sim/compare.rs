use log::debug;

use super::driver::run;
use super::metrics::Metrics;
use crate::core::{ProcessSpec, ScheduleError};
use crate::policy::PolicyKind;

/// Aggregate metrics for one policy in a side-by-side comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyComparison {
    pub policy: String,
    pub metrics: Option<Metrics>,
}

/// Re-run every policy in `kinds` over the same input set and tabulate the
/// aggregate metrics. Each run builds its own process records from `specs`,
/// so computed fields never leak from one policy's run into another's.
pub fn compare(
    specs: &[ProcessSpec],
    kinds: &[PolicyKind],
) -> Result<Vec<PolicyComparison>, ScheduleError> {
    debug!("comparing {} policies", kinds.len());
    kinds
        .iter()
        .map(|kind| {
            let result = run(kind, specs)?;
            Ok(PolicyComparison {
                policy: kind.name().to_string(),
                metrics: Metrics::from_run(&result),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_specs() -> Vec<ProcessSpec> {
        [(1, 0, 8, 3), (2, 1, 4, 1), (3, 2, 9, 4)]
            .into_iter()
            .map(|(pid, arrival_time, burst_time, priority)| ProcessSpec {
                pid,
                arrival_time,
                burst_time,
                priority,
            })
            .collect()
    }

    #[test]
    fn test_compare_tabulates_each_policy() {
        let kinds = vec![
            PolicyKind::Fifo,
            PolicyKind::RoundRobin { quantum: 2 },
            PolicyKind::Srtf,
        ];
        let rows = compare(&sample_specs(), &kinds).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].policy, "fifo");
        assert_eq!(rows[1].policy, "round-robin");
        assert_eq!(rows[2].policy, "srtf");
        assert!(rows.iter().all(|row| row.metrics.is_some()));
    }

    #[test]
    fn test_runs_do_not_contaminate_each_other() {
        // The same policy twice in one comparison must agree with a fresh
        // standalone run; a shared mutable process set would break this.
        let kinds = vec![PolicyKind::Sjf, PolicyKind::Sjf];
        let rows = compare(&sample_specs(), &kinds).unwrap();
        assert_eq!(rows[0].metrics, rows[1].metrics);

        let standalone = run(&PolicyKind::Sjf, &sample_specs()).unwrap();
        assert_eq!(rows[0].metrics, Metrics::from_run(&standalone));
    }

    #[test]
    fn test_bad_parameter_fails_whole_comparison() {
        let kinds = vec![PolicyKind::Fifo, PolicyKind::RoundRobin { quantum: 0 }];
        assert!(compare(&sample_specs(), &kinds).is_err());
    }
}
