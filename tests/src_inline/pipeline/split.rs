use super::*;

fn row(cells: &[(&str, &str)]) -> RawRow {
    RawRow::new(
        cells
            .iter()
            .map(|(c, v)| (c.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn splits_key_from_fields() {
    let raw = row(&[("id", "1"), ("Name", "Wheat"), ("CoverCrop", "TRUE")]);
    let record = split_row(&raw, "croptypes").expect("split");

    assert_eq!(record.entity, "croptypes");
    assert_eq!(record.pk, InferredValue::Int(1));
    assert_eq!(
        record.fields.get("name"),
        Some(&InferredValue::Str("Wheat".to_string()))
    );
    assert_eq!(record.fields.get("covercrop"), Some(&InferredValue::Bool(true)));
    assert_eq!(record.fields.len(), 2);
    assert!(!record.fields.contains_key("id"));
}

#[test]
fn uppercase_key_column_is_found() {
    let record = split_row(&row(&[("ID", "9"), ("Name", "Barley")]), "crops").expect("split");
    assert_eq!(record.pk, InferredValue::Int(9));
    assert!(!record.fields.contains_key("id"));
}

#[test]
fn missing_key_column_is_fatal() {
    let err = split_row(&row(&[("Name", "Wheat")]), "croptypes").expect_err("must fail");
    assert!(matches!(err, ConvertError::MissingKeyColumn { entity } if entity == "croptypes"));
}

#[test]
fn duplicate_key_columns_keep_the_first() {
    let record = split_row(&row(&[("id", "1"), ("Id", "2")]), "crops").expect("split");
    assert_eq!(record.pk, InferredValue::Int(1));
    assert!(record.fields.is_empty());
}

#[test]
fn empty_cells_become_null_fields() {
    let record = split_row(&row(&[("id", "1"), ("HarvestBushelsPerTon", "")]), "crops")
        .expect("split");
    assert_eq!(
        record.fields.get("harvestbushelsperton"),
        Some(&InferredValue::Null)
    );
}
