//! CHIRP CSV output

use crate::error::{ChirpError, ChirpResult};
use crate::types::{NormalizedRecord, FIELD_NAMES};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes CHIRP import rows. The header goes out as soon as the writer is created,
/// so an empty channel list still produces a valid file.
pub struct CsvWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> ChirpResult<Self> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        inner.write_record(FIELD_NAMES)?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, record: &NormalizedRecord) -> ChirpResult<()> {
        self.inner.serialize(record)?;
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, records: I) -> ChirpResult<()>
    where
        I: IntoIterator<Item = &'a NormalizedRecord>,
    {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> ChirpResult<W> {
        self.inner.flush()?;
        self.inner.into_inner().map_err(|e| {
            ChirpError::Io(std::io::Error::new(e.error().kind(), e.error().to_string()))
        })
    }
}

/// Write `records` to a new CSV file at `path`
pub fn write_csv_file(path: &Path, records: &[NormalizedRecord]) -> ChirpResult<()> {
    let file = File::create(path)?;
    let mut writer = CsvWriter::new(file)?;
    writer.write_all(records)?;
    writer.finish()?;
    Ok(())
}

/// Render `records` as CSV text
pub fn to_csv_string(records: &[NormalizedRecord]) -> ChirpResult<String> {
    let mut writer = CsvWriter::new(Vec::new())?;
    writer.write_all(records)?;
    let bytes = writer.finish()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
