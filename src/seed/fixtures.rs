use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::record::{EntityBatch, LoadBatch, Record};
use crate::seed::{BatchLoader, LoadError, SeedStore, StoreError};

/// Directory of JSON fixture files acting as both store and loader:
/// one array per entity plus a combined `all_data.json`. Loads rewrite
/// whole files, so repeating a load converges instead of duplicating.
pub struct FixtureDir {
    dir: PathBuf,
}

impl FixtureDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn entity_path(&self, entity: &str) -> PathBuf {
        self.dir.join(format!("{entity}.json"))
    }
}

impl SeedStore for FixtureDir {
    fn count_rows(&self, entity: &str) -> Result<u64, StoreError> {
        let path = self.entity_path(entity);
        if !path.is_file() {
            return Ok(0);
        }
        let text = fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let rows = value
            .as_array()
            .ok_or_else(|| StoreError::NotAnArray(entity.to_string()))?;
        Ok(rows.len() as u64)
    }
}

impl BatchLoader for FixtureDir {
    fn load(&mut self, batch: &LoadBatch) -> Result<(), LoadError> {
        fs::create_dir_all(&self.dir)?;

        for entity_batch in &batch.entities {
            reject_duplicate_keys(entity_batch)?;
            let json = serde_json::to_string_pretty(&entity_batch.records)?;
            fs::write(self.entity_path(&entity_batch.entity), json)?;
        }

        let combined: Vec<&Record> = batch.combined().collect();
        let json = serde_json::to_string_pretty(&combined)?;
        fs::write(self.dir.join("all_data.json"), json)?;
        Ok(())
    }
}

// The unique-constraint analogue: key collisions are the store layer's
// problem, not the pipeline's.
fn reject_duplicate_keys(batch: &EntityBatch) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for record in &batch.records {
        let key = serde_json::to_string(&record.pk)?;
        if !seen.insert(key) {
            return Err(LoadError::DuplicatePrimaryKey {
                entity: batch.entity.clone(),
                pk: record.pk.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/seed/fixtures.rs"]
mod tests;
