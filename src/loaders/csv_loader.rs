use super::loader::{Loader, insert_mark};
use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use rcard::{Mark, StudentRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::trace;

#[derive(Debug, Deserialize)]
struct MarkRow {
    subject: String,
    mark: Mark,
}

/// Marks read from a CSV file with a `subject,mark` header.
pub struct CsvLoader<R> {
    name: String,
    reader: csv::Reader<R>,
}

impl CsvLoader<File> {
    pub fn from_path(name: String, path: &Path) -> Result<Self> {
        let file = File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?;
        Ok(Self::from_reader(name, file))
    }
}

impl<R: Read> CsvLoader<R> {
    pub fn from_reader(name: String, reader: R) -> Self {
        Self {
            name,
            reader: csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader),
        }
    }
}

impl<R: Read> Loader for CsvLoader<R> {
    fn load(&mut self) -> Result<StudentRecord> {
        let mut marks = IndexMap::new();
        for (line, row) in self.reader.deserialize::<MarkRow>().enumerate() {
            let row = row.wrap_err_with(|| format!("cannot read mark on data line {}", line + 1))?;
            trace!(subject = %row.subject, mark = %row.mark, "mark from csv");
            insert_mark(&mut marks, row.subject, row.mark)?;
        }
        Ok(StudentRecord {
            name: self.name.clone(),
            marks,
        })
    }
}
