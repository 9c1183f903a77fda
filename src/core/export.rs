use crate::core::catalogue::programs;
use crate::core::{ProgramListing, Result, Storage};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use zip::write::{FileOptions, ZipWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Tsv,
    /// ZIP archive holding the JSON, CSV and TSV renderings.
    Bundle,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "programs.json",
            ExportFormat::Csv => "programs.csv",
            ExportFormat::Tsv => "programs.tsv",
            ExportFormat::Bundle => "programs.zip",
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, ExportFormat::Bundle)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Bundle => "bundle",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "bundle" | "zip" => Ok(ExportFormat::Bundle),
            other => Err(format!(
                "unknown format '{}', expected one of: json, csv, tsv, bundle",
                other
            )),
        }
    }
}

pub fn to_json(records: &[ProgramListing]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn to_csv(records: &[ProgramListing]) -> Result<String> {
    to_delimited(records, b',')
}

pub fn to_tsv(records: &[ProgramListing]) -> Result<String> {
    to_delimited(records, b'\t')
}

fn to_delimited(records: &[ProgramListing], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    // Header is written even when there are no records.
    writer.write_record(ProgramListing::FIELD_NAMES)?;
    for record in records {
        writer.write_record(record.fields().iter().map(|(_, value)| *value))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    into_text(bytes)
}

fn into_text(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

pub fn to_bundle(records: &[ProgramListing]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    zip.start_file::<_, ()>(ExportFormat::Json.file_name(), FileOptions::default())?;
    zip.write_all(to_json(records)?.as_bytes())?;

    zip.start_file::<_, ()>(ExportFormat::Csv.file_name(), FileOptions::default())?;
    zip.write_all(to_csv(records)?.as_bytes())?;

    zip.start_file::<_, ()>(ExportFormat::Tsv.file_name(), FileOptions::default())?;
    zip.write_all(to_tsv(records)?.as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

pub fn render(records: &[ProgramListing], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => to_json(records).map(String::into_bytes),
        ExportFormat::Csv => to_csv(records).map(String::into_bytes),
        ExportFormat::Tsv => to_tsv(records).map(String::into_bytes),
        ExportFormat::Bundle => to_bundle(records),
    }
}

/// Writes a rendering to `out` and flushes it.
pub fn write_to<W: Write>(mut out: W, data: &[u8]) -> Result<()> {
    out.write_all(data)?;
    out.flush()?;
    Ok(())
}

/// Writes the catalogue through a [`Storage`] backend.
pub struct CatalogueExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> CatalogueExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn export(&self, format: ExportFormat) -> Result<String> {
        let records = programs();
        tracing::debug!("Rendering {} programs as {}", records.len(), format);

        let data = render(records, format)?;
        tracing::debug!("Writing {} ({} bytes)", format.file_name(), data.len());

        let path = self.storage.write_file(format.file_name(), &data).await?;
        tracing::info!("Exported {} programs to {}", records.len(), path);
        Ok(path)
    }
}
