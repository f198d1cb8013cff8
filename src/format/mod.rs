//! Terminal summary of a resolution (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::report::artifact::{render, ArtifactFormat};
use crate::report::ResolutionRecord;
use std::path::Path;

const BANNER_WIDTH: usize = 60;

/// Formats a resolution record for the terminal.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the record summary.
    pub fn format_record(&self, record: &ResolutionRecord) -> String {
        match self.format {
            OutputFormat::Table => self.table(record),
            OutputFormat::Json => self.json(record),
            OutputFormat::Markdown => self.markdown(record),
            OutputFormat::Csv => self.csv(record),
        }
    }

    fn table(&self, record: &ResolutionRecord) -> String {
        let rule = "=".repeat(BANNER_WIDTH);
        let mut lines = vec![rule.clone(), "Result Summary:".to_string(), rule];

        for (name, value) in record.fields() {
            lines.push(format!("{:<15} : {}", name, value));
        }

        lines.join("\n")
    }

    fn json(&self, record: &ResolutionRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    fn markdown(&self, record: &ResolutionRecord) -> String {
        let mut lines = vec![
            format!("## {}", record.product),
            String::new(),
            "| Field | Value |".to_string(),
            "|-------|-------|".to_string(),
        ];

        for (name, value) in record.fields() {
            lines.push(format!("| {} | {} |", name, value.replace('|', "\\|")));
        }

        lines.join("\n")
    }

    fn csv(&self, record: &ResolutionRecord) -> String {
        render(record, ArtifactFormat::Csv, Path::new("-"))
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Confidence;

    fn make_record() -> ResolutionRecord {
        ResolutionRecord {
            barcode: "4005808210446".to_string(),
            product: "Anti-Wrinkle Eye Cream".to_string(),
            brand: "Nivea".to_string(),
            country: "UK".to_string(),
            websites: "boots.com; amazon.co.uk; superdrug.com".to_string(),
            nearby_stores: "Boots; Superdrug".to_string(),
            confidence: Confidence::High,
        }
    }

    fn make_not_found_record() -> ResolutionRecord {
        ResolutionRecord {
            barcode: "0000000000000".to_string(),
            product: "Not found".to_string(),
            brand: "Unknown".to_string(),
            country: "DE".to_string(),
            websites: "None found".to_string(),
            nearby_stores: "None found".to_string(),
            confidence: Confidence::Low,
        }
    }

    #[test]
    fn test_table_summary() {
        let output = Formatter::new(OutputFormat::Table).format_record(&make_record());

        assert!(output.starts_with(&"=".repeat(60)));
        assert!(output.contains("Result Summary:"));
        assert!(output.contains("barcode         : 4005808210446"));
        assert!(output.contains("product         : Anti-Wrinkle Eye Cream"));
        assert!(output.contains("nearby_stores   : Boots; Superdrug"));
        assert!(output.contains("confidence      : High"));
    }

    #[test]
    fn test_table_not_found() {
        let output = Formatter::new(OutputFormat::Table).format_record(&make_not_found_record());
        assert!(output.contains("product         : Not found"));
        assert!(output.contains("websites        : None found"));
        assert!(output.contains("confidence      : Low"));
    }

    #[test]
    fn test_json_summary() {
        let output = Formatter::new(OutputFormat::Json).format_record(&make_record());
        assert!(output.starts_with('{'));

        let parsed: ResolutionRecord = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, make_record());
    }

    #[test]
    fn test_markdown_summary() {
        let output = Formatter::new(OutputFormat::Markdown).format_record(&make_record());
        assert!(output.contains("## Anti-Wrinkle Eye Cream"));
        assert!(output.contains("| Field | Value |"));
        assert!(output.contains("| brand | Nivea |"));
        assert!(output.contains("| confidence | High |"));
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let mut record = make_record();
        record.product = "Cream | Night".to_string();
        let output = Formatter::new(OutputFormat::Markdown).format_record(&record);
        assert!(output.contains("| product | Cream \\| Night |"));
    }

    #[test]
    fn test_csv_summary() {
        let output = Formatter::new(OutputFormat::Csv).format_record(&make_not_found_record());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "barcode,product,brand,country,websites,nearby_stores,confidence");
        assert_eq!(lines[1], "0000000000000,Not found,Unknown,DE,None found,None found,Low");
    }
}
