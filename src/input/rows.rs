use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use crate::input::{InputError, open_reader};

/// One data line as ordered `(column, raw value)` pairs. Values are
/// untouched text; alignment is by position against the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Lazy row stream over one dataset export. Restartable only by
/// calling `read_rows` again.
pub struct DatasetRows {
    path: PathBuf,
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<Box<dyn io::BufRead>>,
    line: u64,
}

impl DatasetRows {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn read_rows(path: &Path) -> Result<DatasetRows, InputError> {
    let reader = open_reader(path)?;
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::None)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    // Spreadsheet exports often prefix the first header cell with a BOM.
    if let Some(first) = headers.first_mut()
        && first.starts_with('\u{feff}')
    {
        first.remove(0);
    }

    Ok(DatasetRows {
        path: path.to_path_buf(),
        headers,
        records: csv_reader.into_records(),
        line: 1,
    })
}

impl Iterator for DatasetRows {
    type Item = Result<RawRow, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        self.line += 1;
        let line = record.position().map_or(self.line, |p| p.line());

        if record.len() != self.headers.len() {
            return Some(Err(InputError::MalformedRow {
                line,
                expected: self.headers.len(),
                found: record.len(),
            }));
        }

        let cells = self
            .headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.clone(), value.to_string()))
            .collect();
        Some(Ok(RawRow::new(cells)))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/rows.rs"]
mod tests;
