use std::path::Path;

use tracing::{info, warn};

use crate::datasets::DatasetSpec;
use crate::input::path_display;
use crate::input::resolver::resolve_source_file;
use crate::input::rows::read_rows;
use crate::model::record::{EntityBatch, LoadBatch, SkipReason, SkippedDataset};
use crate::pipeline::ConvertError;
use crate::pipeline::split::split_row;

/// Converts every dataset in `specs`, in order, into one load batch.
///
/// Datasets without a directory, source file, or data rows are skipped
/// with a warning and recorded on the batch; a missing key column or a
/// malformed row aborts the run.
pub fn aggregate(data_dir: &Path, specs: &[DatasetSpec]) -> Result<LoadBatch, ConvertError> {
    let mut batch = LoadBatch::default();

    for spec in specs {
        let dir = data_dir.join(spec.directory);
        let resolved = resolve_source_file(&dir).map_err(|source| ConvertError::Input {
            entity: spec.entity.to_string(),
            path: dir.clone(),
            source,
        })?;

        let Some(path) = resolved else {
            let reason = if dir.is_dir() {
                SkipReason::NoSourceFiles
            } else {
                SkipReason::MissingDirectory
            };
            warn!(
                entity = spec.entity,
                directory = %path_display(&dir),
                reason = reason.as_str(),
                "dataset skipped"
            );
            batch.skipped.push(SkippedDataset {
                entity: spec.entity.to_string(),
                directory: spec.directory.to_string(),
                reason,
            });
            continue;
        };

        let rows = read_rows(&path).map_err(|source| ConvertError::Input {
            entity: spec.entity.to_string(),
            path: path.clone(),
            source,
        })?;

        let mut records = Vec::new();
        for row in rows {
            let row = row.map_err(|source| ConvertError::Input {
                entity: spec.entity.to_string(),
                path: path.clone(),
                source,
            })?;
            records.push(split_row(&row, spec.entity)?);
        }

        if records.is_empty() {
            warn!(
                entity = spec.entity,
                file = %path_display(&path),
                "no rows converted"
            );
            batch.skipped.push(SkippedDataset {
                entity: spec.entity.to_string(),
                directory: spec.directory.to_string(),
                reason: SkipReason::NoRows,
            });
            continue;
        }

        info!(
            entity = spec.entity,
            file = %path_display(&path),
            records = records.len(),
            "dataset converted"
        );
        batch.entities.push(EntityBatch {
            entity: spec.entity.to_string(),
            records,
        });
    }

    Ok(batch)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/aggregate.rs"]
mod tests;
