use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::CommonArgs;
use crate::datasets::builtin_specs;
use crate::seed::SeedOutcome;
use crate::seed::fixtures::FixtureDir;
use crate::seed::guard::ensure_seeded;

#[derive(Args, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,

    /// Entity whose row count decides whether seeding is needed
    #[arg(long)]
    pub(crate) sentinel: Option<String>,
}

pub fn handle(args: SeedArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    info!(stage = "seed", "starting stage");
    let outcome = run(&args)?;
    match &outcome {
        SeedOutcome::Seeded { loaded } => {
            let records: usize = loaded.iter().map(|(_, n)| *n).sum();
            info!(entities = loaded.len(), records, "seed complete");
        }
        SeedOutcome::SkippedAlreadySeeded { sentinel_rows } => {
            info!(rows = sentinel_rows, "already seeded, nothing to do");
        }
    }
    info!(
        stage = "seed",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}

pub(crate) fn run(args: &SeedArgs) -> anyhow::Result<SeedOutcome> {
    let resolved = args.common.resolve()?;
    let specs = builtin_specs();
    let sentinel = args
        .sentinel
        .clone()
        .or_else(|| resolved.sentinel.clone())
        .unwrap_or_else(|| specs[0].entity.to_string());

    // FixtureDir is both store and loader; the guard wants them as
    // separate collaborators.
    let store = FixtureDir::new(&resolved.fixture_dir);
    let mut loader = FixtureDir::new(&resolved.fixture_dir);
    let outcome = ensure_seeded(&sentinel, &resolved.data_dir, specs, &store, &mut loader)?;
    Ok(outcome)
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/seed.rs"]
mod tests;
