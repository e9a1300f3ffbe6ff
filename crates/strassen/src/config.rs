//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use strassen_core::constants::{
    DEFAULT_EDGE_PROBABILITIES, DEFAULT_SEED, DEFAULT_SWEEP_DIMS, DEFAULT_SWEEP_THRESHOLDS,
    DEFAULT_THRESHOLD, DEFAULT_TRIANGLE_TRIALS, DEFAULT_TRIANGLE_VERTICES,
};

/// Strassen-rs — square integer matrix multiplication with Strassen's algorithm.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
pub struct AppConfig {
    /// Verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (results only, no progress or headers).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Multiply the two matrices stored in a file and print the diagonal.
    Multiply(MultiplyArgs),
    /// Time Strassen across dimensions and crossover thresholds.
    Sweep(SweepArgs),
    /// Count triangles in random graphs by cubing their adjacency matrix.
    Triangles(TriangleArgs),
    /// Generate a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct MultiplyArgs {
    /// Text file with one integer per line: A then B, row-major.
    pub file: PathBuf,

    /// Dimension of both matrices.
    #[arg(short, long, env = "STRASSEN_DIM")]
    pub dim: usize,

    /// Crossover threshold: dimensions at or below it use the classical product.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, env = "STRASSEN_THRESHOLD")]
    pub threshold: usize,

    /// Print the full product instead of its diagonal.
    #[arg(long)]
    pub full: bool,

    /// Report recursion statistics on stderr.
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Comma-separated matrix dimensions.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SWEEP_DIMS)]
    pub dims: Vec<usize>,

    /// Comma-separated crossover thresholds.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SWEEP_THRESHOLDS)]
    pub thresholds: Vec<usize>,

    /// Seed for operand generation.
    #[arg(long, default_value_t = DEFAULT_SEED, env = "STRASSEN_SEED")]
    pub seed: u64,

    /// Untimed runs before measuring each point.
    #[arg(long, default_value_t = 0)]
    pub warmup: u32,

    /// Timed runs per point (the median is reported).
    #[arg(long, default_value_t = 1)]
    pub iterations: u32,

    /// Write the report as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TriangleArgs {
    /// Number of vertices per graph.
    #[arg(long, default_value_t = DEFAULT_TRIANGLE_VERTICES)]
    pub vertices: usize,

    /// Comma-separated edge probabilities.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_EDGE_PROBABILITIES)]
    pub probabilities: Vec<f64>,

    /// Graphs generated per probability.
    #[arg(long, default_value_t = DEFAULT_TRIANGLE_TRIALS)]
    pub trials: usize,

    /// Seed for graph generation.
    #[arg(long, default_value_t = DEFAULT_SEED, env = "STRASSEN_SEED")]
    pub seed: u64,

    /// Crossover threshold.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, env = "STRASSEN_THRESHOLD")]
    pub threshold: usize,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn multiply_defaults() {
        let config = parse(&["strassen", "multiply", "in.txt", "--dim", "4"]);
        match config.command {
            Commands::Multiply(args) => {
                assert_eq!(args.dim, 4);
                assert_eq!(args.threshold, DEFAULT_THRESHOLD);
                assert!(!args.full);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn sweep_lists() {
        let config = parse(&["strassen", "sweep", "--dims", "8,9", "--thresholds", "2,4"]);
        match config.command {
            Commands::Sweep(args) => {
                assert_eq!(args.dims, vec![8, 9]);
                assert_eq!(args.thresholds, vec![2, 4]);
                assert_eq!(args.iterations, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn sweep_defaults_match_constants() {
        let config = parse(&["strassen", "sweep"]);
        match config.command {
            Commands::Sweep(args) => {
                assert_eq!(args.dims, DEFAULT_SWEEP_DIMS.to_vec());
                assert_eq!(args.thresholds, DEFAULT_SWEEP_THRESHOLDS.to_vec());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["strassen", "triangles", "--vertices", "16", "-q"]);
        assert!(config.quiet);
        assert!(matches!(config.command, Commands::Triangles(ref t) if t.vertices == 16));
    }

    #[test]
    fn missing_dim_is_an_error() {
        assert!(AppConfig::try_parse_from(["strassen", "multiply", "in.txt"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
