use std::fs::File;
use std::io::Write;
use std::path::Path;

use ::csv::{ReaderBuilder, WriterBuilder};

use crate::{
    error::{DatasetError, Result},
    types::{DatasetRow, HU_COUNT},
};

/// Headerless CSV sink for `label,h1,...,h7` rows
pub struct DatasetWriter<W: Write> {
    inner: ::csv::Writer<W>,
    rows: usize,
}

impl DatasetWriter<File> {
    /// Create (or truncate) the output file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner = WriterBuilder::new().has_headers(false).from_path(path)?;
        Ok(Self { inner, rows: 0 })
    }
}

impl<W: Write> DatasetWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            inner: WriterBuilder::new().has_headers(false).from_writer(writer),
            rows: 0,
        }
    }

    pub fn write_row(&mut self, row: &DatasetRow) -> Result<()> {
        let mut record = Vec::with_capacity(HU_COUNT + 1);
        record.push(row.label.clone());
        // Debug keeps a trailing ".0" on integral values, e.g. -10.0
        record.extend(row.values.iter().map(|v| format!("{v:?}")));
        self.inner.write_record(&record)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|err| DatasetError::Io(std::io::Error::new(err.error().kind(), err.to_string())))
    }
}

/// Parse a generated dataset back into rows
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        if record.len() != HU_COUNT + 1 {
            return Err(DatasetError::MalformedRow {
                line,
                reason: format!("expected {} fields, found {}", HU_COUNT + 1, record.len()),
            });
        }

        let mut values = [0.0; HU_COUNT];
        for (slot, field) in values.iter_mut().zip(record.iter().skip(1)) {
            *slot = field.trim().parse().map_err(|_| DatasetError::MalformedRow {
                line,
                reason: format!("'{field}' is not a number"),
            })?;
        }

        rows.push(DatasetRow {
            label: record[0].to_string(),
            values,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_have_label_and_seven_values() {
        let mut writer = DatasetWriter::from_writer(Vec::new());
        let row = DatasetRow {
            label: "circle".to_string(),
            values: [-3.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0],
        };
        writer.write_row(&row).unwrap();
        assert_eq!(writer.rows(), 1);

        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "circle,-3.0,-10.0,-10.0,-10.0,-10.0,-10.0,-10.0\n");
    }

    #[test]
    fn labels_with_commas_are_quoted() {
        let mut writer = DatasetWriter::from_writer(Vec::new());
        let row = DatasetRow {
            label: "a,b".to_string(),
            values: [-1.5; HU_COUNT],
        };
        writer.write_row(&row).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(text.starts_with("\"a,b\",-1.5,"));
    }

    #[test]
    fn written_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hu.csv");

        let rows = vec![
            DatasetRow { label: "square".into(), values: [-3.18, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0] },
            DatasetRow { label: "bar".into(), values: [-2.5, -3.25, -9.0, -8.5, -10.0, -7.75, -10.0] },
        ];

        let mut writer = DatasetWriter::create(&path).unwrap();
        for row in &rows {
            writer.write_row(row).unwrap();
        }
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(read_dataset(&path).unwrap(), rows);
    }

    #[test]
    fn short_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "circle,1.0,2.0\n").unwrap();

        let err = read_dataset(&path).unwrap_err();
        assert!(matches!(err, DatasetError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "circle,1,2,3,x,5,6,7\n").unwrap();

        assert!(matches!(
            read_dataset(&path),
            Err(DatasetError::MalformedRow { .. })
        ));
    }
}
