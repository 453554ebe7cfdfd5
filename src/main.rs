use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use schedsim::sim::workload::bernoulli_workload;
use schedsim::{
    Metrics, Pid, PolicyComparison, PolicyKind, ProcessSpec, RunResult, ScheduleError, Ticks,
    compare, run,
};

#[derive(Parser, Debug)]
#[command(name = "schedsim")]
#[command(about = "Simulate classical single-CPU scheduling policies", long_about = None)]
struct Opts {
    /// JSON file with an array of process specs; a synthetic workload is
    /// generated when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Scheduling policy: fifo, round-robin, mlfq, priority, sjf, srtf
    #[arg(short, long, default_value = "fifo")]
    policy: String,

    /// Time quantum for round-robin
    #[arg(short, long, default_value_t = 2)]
    quantum: Ticks,

    /// Per-level time quanta for mlfq, highest-priority level first
    #[arg(long = "level-quantum", default_values_t = vec![4u64, 8])]
    level_quantums: Vec<Ticks>,

    /// Also run these policies over the same input and tabulate their
    /// metrics side by side
    #[arg(short, long, value_delimiter = ',')]
    compare: Vec<String>,

    /// Write the annotated process table to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replay the timeline step by step with this per-interval delay
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Synthetic workload horizon in ticks
    #[arg(long, default_value_t = 40)]
    horizon: Ticks,

    /// Synthetic workload RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Increase verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logger(opts.verbose)?;

    let specs = load_specs(&opts)?;
    let kind = parse_policy(&opts.policy, &opts)?;

    let result = run(&kind, &specs)?;
    info!(
        "{}: {} processes, {} intervals",
        kind.name(),
        result.processes.len(),
        result.timeline.intervals().len()
    );

    print_gantt(&result, opts.delay_ms);
    print_process_table(&result);
    match Metrics::from_run(&result) {
        Some(metrics) => print_metrics(&metrics),
        None => println!("(empty run, metrics undefined)"),
    }

    if !opts.compare.is_empty() {
        let kinds = opts
            .compare
            .iter()
            .map(|name| parse_policy(name, &opts))
            .collect::<Result<Vec<_>>>()?;
        let rows = compare(&specs, &kinds)?;
        print_comparison(&rows);
    }

    if let Some(path) = &opts.output {
        write_output(path, &result)?;
    }

    Ok(())
}

fn init_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        level,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn load_specs(opts: &Opts) -> Result<Vec<ProcessSpec>> {
    match &opts.input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let specs: Vec<ProcessSpec> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(specs)
        }
        None => {
            info!("no input file, generating workload with seed {}", opts.seed);
            Ok(bernoulli_workload(opts.horizon, 0.3, 0.5, 2, 6, 4, opts.seed))
        }
    }
}

fn parse_policy(name: &str, opts: &Opts) -> Result<PolicyKind> {
    let kind = match name {
        "fifo" => PolicyKind::Fifo,
        "round-robin" | "rr" => PolicyKind::RoundRobin {
            quantum: opts.quantum,
        },
        "mlfq" => PolicyKind::Mlfq {
            quantums: opts.level_quantums.clone(),
        },
        "priority" => PolicyKind::Priority,
        "sjf" => PolicyKind::Sjf,
        "srtf" => PolicyKind::Srtf,
        other => {
            return Err(ScheduleError::UnknownPolicy {
                name: other.to_string(),
            }
            .into());
        }
    };
    Ok(kind)
}

fn print_gantt(result: &RunResult, delay_ms: Option<u64>) {
    println!("Gantt chart:");
    let mut line = String::new();
    for interval in result.timeline.intervals() {
        line.push_str(&format!(
            "| {} {}..{} ",
            interval.label, interval.start, interval.end
        ));
        if let Some(ms) = delay_ms {
            println!("{line}|");
            thread::sleep(Duration::from_millis(ms));
        }
    }
    if delay_ms.is_none() {
        line.push('|');
        println!("{line}");
    }
    println!();
}

fn fmt_tick(tick: Option<Ticks>) -> String {
    match tick {
        Some(t) => t.to_string(),
        None => "-".to_string(),
    }
}

fn print_process_table(result: &RunResult) {
    println!(
        "{:>5} {:>8} {:>6} {:>11} {:>11} {:>8}",
        "pid", "arrival", "burst", "completion", "turnaround", "waiting"
    );
    for p in &result.processes {
        println!(
            "{:>5} {:>8} {:>6} {:>11} {:>11} {:>8}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            fmt_tick(p.completion_time),
            fmt_tick(p.turnaround_time()),
            fmt_tick(p.waiting_time()),
        );
    }
    println!();
}

fn print_metrics(metrics: &Metrics) {
    println!("Average waiting time:    {:.2}", metrics.avg_waiting_time);
    println!("Average turnaround time: {:.2}", metrics.avg_turnaround_time);
    println!("CPU utilization:         {:.2}%", metrics.cpu_utilization);
    println!(
        "Throughput:              {:.3} processes/tick",
        metrics.throughput
    );
}

fn print_comparison(rows: &[PolicyComparison]) {
    println!();
    println!(
        "{:>12} {:>9} {:>11} {:>8} {:>11}",
        "policy", "avg wait", "avg turnrnd", "util %", "throughput"
    );
    for row in rows {
        match &row.metrics {
            Some(m) => println!(
                "{:>12} {:>9.2} {:>11.2} {:>8.2} {:>11.3}",
                row.policy, m.avg_waiting_time, m.avg_turnaround_time, m.cpu_utilization,
                m.throughput
            ),
            None => println!("{:>12} {:>9} {:>11} {:>8} {:>11}", row.policy, "-", "-", "-", "-"),
        }
    }
}

#[derive(Serialize)]
struct ProcessRow {
    pid: Pid,
    arrival_time: Ticks,
    burst_time: Ticks,
    start_time: Option<Ticks>,
    completion_time: Option<Ticks>,
    turnaround_time: Option<Ticks>,
    waiting_time: Option<Ticks>,
}

fn write_output(path: &Path, result: &RunResult) -> Result<()> {
    let rows: Vec<ProcessRow> = result
        .processes
        .iter()
        .map(|p| ProcessRow {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            start_time: p.start_time,
            completion_time: p.completion_time,
            turnaround_time: p.turnaround_time(),
            waiting_time: p.waiting_time(),
        })
        .collect();
    let json = serde_json::to_string_pretty(&rows)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} process rows to {}", rows.len(), path.display());
    Ok(())
}
