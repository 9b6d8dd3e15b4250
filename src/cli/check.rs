use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::CommonArgs;
use crate::datasets::builtin_specs;
use crate::pipeline::aggregate::aggregate;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

/// Dry run: convert everything and report, write nothing.
pub fn handle(args: CheckArgs) -> anyhow::Result<()> {
    let resolved = args.common.resolve()?;

    let start = Instant::now();
    info!(stage = "convert", "starting stage");
    let batch = aggregate(&resolved.data_dir, builtin_specs())?;
    info!(
        stage = "convert",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    for entity_batch in &batch.entities {
        info!(
            entity = entity_batch.entity.as_str(),
            records = entity_batch.records.len(),
            "would load"
        );
    }
    info!(
        entities = batch.entities.len(),
        records = batch.total_records(),
        skipped = batch.skipped.len(),
        "conversion check complete"
    );
    Ok(())
}
