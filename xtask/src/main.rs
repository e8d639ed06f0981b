use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "inline_optional workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the OptionalValue benchmarks for every feature variant
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "optional_benchmark";

/// (baseline name, cargo features)
const VARIANTS: &[(&str, &[&str])] = &[("default", &[]), ("tracing", &["tracing"])];

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running OptionalValue benchmarks...");

    for (baseline, features) in VARIANTS {
        println!("\n>>> Benchmarking variant: {baseline}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", BENCH]);
        if !features.is_empty() {
            cmd.arg("--features").arg(features.join(","));
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench for {baseline}"))?;

        if status.success() {
            println!("Finished {baseline} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark failed for {baseline}");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    // workload -> baseline -> mean ns
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# OptionalValue Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for (baseline, _) in VARIANTS {
        write!(file, " {baseline} (ns) |")?;
    }
    writeln!(file, " tracing vs default |")?;

    write!(file, "|---|")?;
    for _ in VARIANTS {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;
        for (baseline, _) in VARIANTS {
            match by_baseline.get(*baseline) {
                Some(ns) => write!(file, " {ns:.2} |")?,
                None => write!(file, " N/A |")?,
            }
        }
        match (by_baseline.get("default"), by_baseline.get("tracing")) {
            (Some(base), Some(traced)) if *base > 0.0 => {
                writeln!(file, " **{:.2}x** |", traced / base)?;
            }
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks `.../<group>/<function>/<baseline>/estimates.json`.
fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let baseline = dir_name(baseline_dir);
        if !VARIANTS.iter().any(|(name, _)| *name == baseline) {
            continue;
        }

        let workload = match workload_dir.parent() {
            Some(group_dir) => format!("{} / {}", dir_name(group_dir), dir_name(workload_dir)),
            None => dir_name(workload_dir),
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("Malformed criterion estimates in {}", path.display()))?;

        results
            .entry(workload)
            .or_default()
            .insert(baseline, estimates.mean.point_estimate);
    }
    Ok(())
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
