use std::collections::BTreeMap;

use crate::input::rows::RawRow;
use crate::model::record::Record;
use crate::model::value::InferredValue;
use crate::pipeline::ConvertError;
use crate::pipeline::infer::infer;

/// Splits one raw row into a primary key and a typed field map.
///
/// The first column whose lower-cased name is `id` becomes the key and
/// is excluded from the field map; later duplicates of it are dropped,
/// so the map can never contain an `id` entry.
pub fn split_row(row: &RawRow, entity: &str) -> Result<Record, ConvertError> {
    let mut pk: Option<InferredValue> = None;
    let mut fields = BTreeMap::new();

    for (column, value) in row.iter() {
        let lowered = column.to_lowercase();
        if lowered == "id" {
            if pk.is_none() {
                pk = Some(infer(value, column));
            }
            continue;
        }
        fields.insert(lowered, infer(value, column));
    }

    let pk = pk.ok_or_else(|| ConvertError::MissingKeyColumn {
        entity: entity.to_string(),
    })?;

    Ok(Record {
        entity: entity.to_string(),
        pk,
        fields,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/split.rs"]
mod tests;
