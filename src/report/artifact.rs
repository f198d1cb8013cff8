//! Writes the output record as CSV or as an Excel workbook.

use super::{ResolutionRecord, COLUMNS};
use crate::error::{ResolveError, Result};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

/// File format of the output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Csv,
    Xlsx,
}

impl ArtifactFormat {
    /// Picks the format from the file extension; anything but `.xlsx` is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => ArtifactFormat::Xlsx,
            _ => ArtifactFormat::Csv,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactFormat::Csv => "CSV",
            ArtifactFormat::Xlsx => "Excel",
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renders the record to bytes in the given format.
pub fn render(record: &ResolutionRecord, format: ArtifactFormat, path: &Path) -> Result<Vec<u8>> {
    match format {
        ArtifactFormat::Csv => render_csv(record, path),
        ArtifactFormat::Xlsx => render_xlsx(record, path),
    }
}

/// Writes the record to `path`. The artifact is fully rendered before the
/// file is touched, so a rendering failure leaves nothing behind.
pub fn write_artifact(record: &ResolutionRecord, path: &Path) -> Result<ArtifactFormat> {
    let format = ArtifactFormat::from_path(path);
    let bytes = render(record, format, path)?;

    std::fs::write(path, bytes)
        .map_err(|source| ResolveError::Io { path: path.to_path_buf(), source })?;

    info!("Results saved to {} ({} format)", path.display(), format);
    Ok(format)
}

fn render_csv(record: &ResolutionRecord, path: &Path) -> Result<Vec<u8>> {
    let output_err = |reason: String| ResolveError::Output { path: path.to_path_buf(), reason };

    let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    writer.serialize(record).map_err(|e| output_err(e.to_string()))?;
    writer.into_inner().map_err(|e| output_err(e.to_string()))
}

fn render_xlsx(record: &ResolutionRecord, path: &Path) -> Result<Vec<u8>> {
    let output_err =
        |e: rust_xlsxwriter::XlsxError| ResolveError::Output { path: path.to_path_buf(), reason: e.to_string() };

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header).map_err(output_err)?;
    }
    for (col, (_, value)) in record.fields().iter().enumerate() {
        worksheet.write_string(1, col as u16, value).map_err(output_err)?;
    }
    worksheet.autofit();

    workbook.save_to_buffer().map_err(output_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::table::RowTable;
    use crate::resolver::Confidence;
    use tempfile::TempDir;

    fn make_record() -> ResolutionRecord {
        ResolutionRecord {
            barcode: "0012345678905".to_string(),
            product: "Hydrating Serum, 50ml".to_string(),
            brand: "CeraVe".to_string(),
            country: "UK".to_string(),
            websites: "boots.com; superdrug.com".to_string(),
            nearby_stores: "None found".to_string(),
            confidence: Confidence::Medium,
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ArtifactFormat::from_path(Path::new("out.xlsx")), ArtifactFormat::Xlsx);
        assert_eq!(ArtifactFormat::from_path(Path::new("OUT.XLSX")), ArtifactFormat::Xlsx);
        assert_eq!(ArtifactFormat::from_path(Path::new("out.csv")), ArtifactFormat::Csv);
        assert_eq!(ArtifactFormat::from_path(Path::new("out.txt")), ArtifactFormat::Csv);
        assert_eq!(ArtifactFormat::from_path(Path::new("out")), ArtifactFormat::Csv);
    }

    #[test]
    fn test_render_csv() {
        let bytes = render(&make_record(), ArtifactFormat::Csv, Path::new("out.csv")).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "barcode,product,brand,country,websites,nearby_stores,confidence");
        assert_eq!(
            lines[1],
            "0012345678905,\"Hydrating Serum, 50ml\",CeraVe,UK,boots.com; superdrug.com,None found,Medium"
        );
    }

    #[test]
    fn test_write_csv_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");

        let format = write_artifact(&make_record(), &path).unwrap();
        assert_eq!(format, ArtifactFormat::Csv);

        let table = RowTable::read(&path).unwrap();
        assert_eq!(table.headers(), COLUMNS);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_write_xlsx_artifact_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.xlsx");

        let format = write_artifact(&make_record(), &path).unwrap();
        assert_eq!(format, ArtifactFormat::Xlsx);

        let table = RowTable::read(&path).unwrap();
        assert_eq!(table.headers(), COLUMNS);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = write_artifact(&make_record(), Path::new("/nonexistent/dir/output.csv")).unwrap_err();
        assert!(matches!(err, ResolveError::Io { .. }));
    }
}
