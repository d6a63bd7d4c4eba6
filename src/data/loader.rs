use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use super::model::{Column, DataTable};

/// The one input file the program reads, relative to the working directory.
pub const DATASET_FILE: &str = "Titanic-Dataset.csv";

/// Loader failures. Only `NotFound` is recognized by the program itself;
/// everything else carries an implementation diagnostic and propagates.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found")]
    NotFound,
    #[error(transparent)]
    Malformed(#[from] anyhow::Error),
}

/// Read a delimited table with a header row into a [`DataTable`].
///
/// Cells are collected column-wise as raw text; dtype inference happens once
/// per column in [`Column::infer`]. No schema validation is performed — the
/// caller assumes the Titanic columns exist.
pub fn load_table(path: &Path) -> Result<DataTable, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| match e.kind() {
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            LoadError::NotFound
        }
        _ => LoadError::Malformed(anyhow::Error::new(e).context("opening CSV")),
    })?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col_idx, cells) in raw_columns.iter_mut().enumerate() {
            cells.push(record.get(col_idx).unwrap_or("").to_string());
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(raw_columns)
        .map(|(name, raw)| Column::infer(name, raw))
        .collect();

    Ok(DataTable::from_columns(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Dtype;

    #[test]
    fn missing_file_is_the_recognized_error() {
        let err = load_table(Path::new("no-such-directory/absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound));
    }

    #[test]
    fn loads_a_small_csv_with_quoted_fields() {
        let dir = std::env::temp_dir().join("titanic-eda-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tiny.csv");
        std::fs::write(
            &path,
            "PassengerId,Name,Age,Embarked\n\
             1,\"Braund, Mr. Owen Harris\",22,S\n\
             2,\"Cumings, Mrs. John Bradley\",,C\n",
        )
        .unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("PassengerId").unwrap().dtype, Dtype::Int64);
        assert_eq!(table.column("Age").unwrap().dtype, Dtype::Float64);
        assert_eq!(table.column("Age").unwrap().null_count(), 1);
        assert_eq!(
            table.column("Name").unwrap().values[0].to_string(),
            "Braund, Mr. Owen Harris"
        );
    }
}
