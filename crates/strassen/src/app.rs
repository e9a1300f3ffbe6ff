//! Application entry point and dispatch.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};

use strassen_calibration::CrossoverSweep;
use strassen_cli::output::{
    format_duration, write_diagonal, write_matrix, write_sweep_table, write_triangle_table,
};
use strassen_cli::progress::SweepProgress;
use strassen_core::graph::TriangleExperiment;
use strassen_core::strassen;

use crate::config::{AppConfig, Commands, MultiplyArgs, SweepArgs, TriangleArgs};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        Commands::Multiply(args) => run_multiply(args, config.quiet),
        Commands::Sweep(args) => run_sweep(args, config.quiet),
        Commands::Triangles(args) => run_triangles(args, config.quiet),
        Commands::Completions { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            strassen_cli::completion::generate_completion(&mut cmd, *shell, &mut io::stdout());
            Ok(())
        }
    }
}

fn run_multiply(args: &MultiplyArgs, quiet: bool) -> Result<()> {
    let (a, b) = strassen_cli::read_matrix_pair(&args.file, args.dim)?;

    let start = Instant::now();
    let (product, stats) = strassen::multiply_with_stats(&a, &b, args.threshold)?;
    let elapsed = start.elapsed();
    tracing::info!(dim = args.dim, threshold = args.threshold, ?elapsed, "multiplied");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.full {
        write_matrix(&mut out, &product)?;
    } else {
        write_diagonal(&mut out, &product)?;
    }
    out.flush()?;

    if args.stats && !quiet {
        eprintln!("Duration: {}", format_duration(elapsed));
        eprintln!("Base cases: {}", stats.base_cases);
        eprintln!("Recursive steps: {}", stats.recursive_steps);
        eprintln!("Padded steps: {}", stats.padded_steps);
        eprintln!("Max depth: {}", stats.max_depth);
    }
    Ok(())
}

fn run_sweep(args: &SweepArgs, quiet: bool) -> Result<()> {
    let sweep = CrossoverSweep {
        dims: args.dims.clone(),
        thresholds: args.thresholds.clone(),
        seed: args.seed,
        warmup: args.warmup,
        iterations: args.iterations,
    };

    let progress = SweepProgress::new(sweep.len(), quiet);
    let report = sweep.run(|point| progress.on_point(point));
    progress.finish();
    let report = report?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_sweep_table(&mut out, &report)?;
    out.flush()?;

    if let Some(path) = &args.output {
        strassen_calibration::io::save_report(&report, path)
            .with_context(|| format!("cannot write report to {}", path.display()))?;
        if !quiet {
            eprintln!("Report written to {}", path.display());
        }
    }
    Ok(())
}

fn run_triangles(args: &TriangleArgs, quiet: bool) -> Result<()> {
    let experiment = TriangleExperiment {
        vertices: args.vertices,
        probabilities: args.probabilities.clone(),
        trials: args.trials,
        threshold: args.threshold,
        seed: args.seed,
    };

    let start = Instant::now();
    let reports = experiment.run()?;
    if !quiet {
        eprintln!(
            "{} graphs of {} vertices in {}",
            args.trials * args.probabilities.len(),
            args.vertices,
            format_duration(start.elapsed())
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_triangle_table(&mut out, &reports)?;
    out.flush()?;
    Ok(())
}
