//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use cotejar::ValidationConfig;

/// Cotejador: validate that two related currency quotes do not diverge
/// beyond a configured tolerance.
#[derive(Debug, Parser)]
#[command(name = "cotejador", version, about)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate divergence between the quotes in two snapshots
    Check(CheckArgs),
    /// Dump the candidate corpus and resolved quote for one snapshot
    Inspect(InspectArgs),
}

/// Arguments for `cotejador check`
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Snapshot of the default view (JSON text-node tree)
    #[arg(long)]
    pub before: PathBuf,

    /// Snapshot of the switched view
    #[arg(long)]
    pub after: PathBuf,

    /// Quote label to locate in both views
    #[arg(long, default_value = "blue")]
    pub label: String,

    /// View-change label (what a live driver would click)
    #[arg(long, default_value = "euro")]
    pub view: String,

    /// Extraction and tolerance tuning
    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Emit the report as JSON instead of the human diagnostic
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `cotejador inspect`
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Snapshot to inspect (JSON text-node tree)
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Quote label to locate
    #[arg(long, default_value = "blue")]
    pub label: String,

    /// Extraction tuning
    #[command(flatten)]
    pub tuning: TuningArgs,
}

/// Overrides for the validation heuristics; unset flags keep the defaults.
#[derive(Debug, Args)]
pub struct TuningArgs {
    /// Relative divergence tolerance (default 0.5)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Candidate length ceiling, exclusive (default 15)
    #[arg(long)]
    pub max_candidate_len: Option<usize>,

    /// Ancestor hops when widening the labeled container (default 2)
    #[arg(long)]
    pub widen_hops: Option<usize>,

    /// Label scope text-length ceiling (default 100)
    #[arg(long)]
    pub scope_len: Option<usize>,
}

impl TuningArgs {
    /// Build a [`ValidationConfig`] from the provided overrides
    #[must_use]
    pub fn to_config(&self) -> ValidationConfig {
        let mut config = ValidationConfig::default();
        if let Some(tolerance) = self.tolerance {
            config = config.with_tolerance(tolerance);
        }
        if let Some(len) = self.max_candidate_len {
            config = config.with_max_candidate_len(len);
        }
        if let Some(hops) = self.widen_hops {
            config = config.with_container_widen_hops(hops);
        }
        if let Some(len) = self.scope_len {
            config = config.with_max_label_scope_len(len);
        }
        config
    }
}
