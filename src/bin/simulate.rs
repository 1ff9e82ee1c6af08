//! Headless shot harness
//!
//! Run shots through the real game systems without a window.
//!
//! Usage:
//!   cargo run --bin simulate -- --sweep 0 360 5
//!   cargo run --bin simulate -- --scenario scenarios/smoke.toml

use std::path::Path;

use hoopshot::simulation::{Outcome, parse_scenario_file, run_scenario, run_sweep};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let scenario_path = args
        .iter()
        .position(|a| a == "--scenario")
        .and_then(|i| args.get(i + 1).cloned());

    let sweep = args.iter().position(|a| a == "--sweep").map(|i| {
        let parse = |offset: usize, fallback: f32| {
            args.get(i + offset)
                .and_then(|s| s.parse::<f32>().ok())
                .unwrap_or(fallback)
        };
        (parse(1, 0.0), parse(2, 360.0), parse(3, 5.0))
    });

    if let Some(path) = scenario_path {
        run_scenario_file(&path);
    } else if let Some((start, end, step)) = sweep {
        run_angle_sweep(start, end, step);
    } else {
        eprintln!("Usage:");
        eprintln!("  simulate --sweep [start] [end] [step]");
        eprintln!("  simulate --scenario <file.toml>");
        std::process::exit(2);
    }
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Score => "score",
        Outcome::MissTimeout => "miss (timeout)",
        Outcome::MissOutOfBounds => "miss (out of bounds)",
        Outcome::Unresolved => "unresolved",
    }
}

fn run_angle_sweep(start: f32, end: f32, step: f32) {
    println!("Angle Sweep {start}..{end} step {step}");
    println!("============================\n");

    let reports = run_sweep(start, end, step);
    let mut scores = 0;
    for report in &reports {
        println!(
            "  {:>5.1}°  {:<22} {:>4} ticks",
            report.angle,
            outcome_label(report.outcome),
            report.ticks
        );
        if report.outcome == Outcome::Score {
            scores += 1;
        }
    }

    println!(
        "\n{} shots, {} scores ({:.0}%)",
        reports.len(),
        scores,
        100.0 * scores as f32 / reports.len().max(1) as f32
    );
}

fn run_scenario_file(path: &str) {
    let scenario = match parse_scenario_file(Path::new(path)) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    println!("Scenario: {}", scenario.name);
    if let Some(description) = &scenario.description {
        println!("{description}");
    }
    println!();

    let mut failures = 0;
    for (report, verdict) in run_scenario(&scenario) {
        let status = match verdict {
            Some(true) => "PASS",
            Some(false) => {
                failures += 1;
                "FAIL"
            }
            None => "    ",
        };
        println!(
            "  [{status}] {:>5.1}°  {:<22} {:>4} ticks",
            report.angle,
            outcome_label(report.outcome),
            report.ticks
        );
    }

    if failures > 0 {
        println!("\n{failures} expectation(s) failed");
        std::process::exit(1);
    }
    println!("\nAll expectations held");
}
