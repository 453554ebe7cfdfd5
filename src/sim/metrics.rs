use average::{Estimate, Mean};

use super::driver::RunResult;

/// Aggregate metrics for one completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    /// Percent of elapsed time spent running processes, counting from tick 0
    /// to the end of the last interval.
    pub cpu_utilization: f64,
    /// Completed processes per elapsed tick.
    pub throughput: f64,
}

impl Metrics {
    /// Aggregate a completed run. `None` for the degenerate empty run, where
    /// every metric is undefined.
    pub fn from_run(result: &RunResult) -> Option<Metrics> {
        let elapsed = result.timeline.end_time()?;
        if result.processes.is_empty() || elapsed == 0 {
            return None;
        }

        let waiting: Mean = result
            .processes
            .iter()
            .filter_map(|p| p.waiting_time())
            .map(|t| t as f64)
            .collect();
        let turnaround: Mean = result
            .processes
            .iter()
            .filter_map(|p| p.turnaround_time())
            .map(|t| t as f64)
            .collect();

        Some(Metrics {
            avg_waiting_time: waiting.estimate(),
            avg_turnaround_time: turnaround.estimate(),
            cpu_utilization: result.timeline.busy_ticks() as f64 / elapsed as f64 * 100.0,
            throughput: result.processes.len() as f64 / elapsed as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessSpec;
    use crate::policy::PolicyKind;
    use crate::sim::driver::run;

    fn sample_specs() -> Vec<ProcessSpec> {
        [(1, 0, 8), (2, 1, 4), (3, 2, 9)]
            .into_iter()
            .map(|(pid, arrival_time, burst_time)| ProcessSpec {
                pid,
                arrival_time,
                burst_time,
                priority: 0,
            })
            .collect()
    }

    #[test]
    fn test_fifo_sample_metrics() {
        let result = run(&PolicyKind::Fifo, &sample_specs()).unwrap();
        let metrics = Metrics::from_run(&result).unwrap();

        // Waits 0, 7, 10 over an elapsed 21 ticks with no idle time.
        assert!((metrics.avg_waiting_time - 17.0 / 3.0).abs() < 1e-9);
        assert!((metrics.avg_turnaround_time - 38.0 / 3.0).abs() < 1e-9);
        assert!((metrics.cpu_utilization - 100.0).abs() < 1e-9);
        assert!((metrics.throughput - 3.0 / 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_idle_time_lowers_utilization() {
        let specs = vec![
            ProcessSpec {
                pid: 1,
                arrival_time: 2,
                burst_time: 3,
                priority: 0,
            },
            ProcessSpec {
                pid: 2,
                arrival_time: 8,
                burst_time: 2,
                priority: 0,
            },
        ];
        let result = run(&PolicyKind::Srtf, &specs).unwrap();
        let metrics = Metrics::from_run(&result).unwrap();

        // Busy 5 of 10 elapsed ticks; the leading gap counts as idle too.
        assert!((metrics.cpu_utilization - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_run_has_no_metrics() {
        let result = run(&PolicyKind::Fifo, &[]).unwrap();
        assert_eq!(Metrics::from_run(&result), None);
    }
}
