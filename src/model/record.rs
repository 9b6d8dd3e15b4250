use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::value::InferredValue;

/// One converted row, tagged with its destination entity. The key
/// column never appears in `fields`.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub entity: String,
    pub pk: InferredValue,
    pub fields: BTreeMap<String, InferredValue>,
}

/// All records destined for one entity, in source row order.
#[derive(Debug, Clone, Serialize)]
pub struct EntityBatch {
    pub entity: String,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingDirectory,
    NoSourceFiles,
    NoRows,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingDirectory => "missing_directory",
            SkipReason::NoSourceFiles => "no_source_files",
            SkipReason::NoRows => "no_rows",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkippedDataset {
    pub entity: String,
    pub directory: String,
    pub reason: SkipReason,
}

/// Ordered output of a full aggregation run: per-entity batches in
/// spec-enumeration order, plus the datasets that contributed nothing.
#[derive(Debug, Clone, Default)]
pub struct LoadBatch {
    pub entities: Vec<EntityBatch>,
    pub skipped: Vec<SkippedDataset>,
}

impl LoadBatch {
    /// Flattened view across entities, preserving batch order.
    pub fn combined(&self) -> impl Iterator<Item = &Record> {
        self.entities.iter().flat_map(|b| b.records.iter())
    }

    pub fn total_records(&self) -> usize {
        self.entities.iter().map(|b| b.records.len()).sum()
    }

    pub fn entity_counts(&self) -> Vec<(String, usize)> {
        self.entities
            .iter()
            .map(|b| (b.entity.clone(), b.records.len()))
            .collect()
    }
}
