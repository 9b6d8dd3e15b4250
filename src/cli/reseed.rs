use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::CommonArgs;
use crate::datasets::builtin_specs;
use crate::seed::SeedOutcome;
use crate::seed::fixtures::FixtureDir;
use crate::seed::guard::force_seed;

#[derive(Args, Debug)]
pub struct ReseedArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

pub fn handle(args: ReseedArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    info!(stage = "reseed", "starting stage");
    let outcome = run(&args)?;
    if let SeedOutcome::Seeded { loaded } = &outcome {
        let records: usize = loaded.iter().map(|(_, n)| *n).sum();
        info!(entities = loaded.len(), records, "reseed complete");
    }
    info!(
        stage = "reseed",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}

pub(crate) fn run(args: &ReseedArgs) -> anyhow::Result<SeedOutcome> {
    let resolved = args.common.resolve()?;
    let mut loader = FixtureDir::new(&resolved.fixture_dir);
    let outcome = force_seed(&resolved.data_dir, builtin_specs(), &mut loader)?;
    Ok(outcome)
}
