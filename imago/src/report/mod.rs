//! Report rendering.
//!
//! Consumes the checked rows produced by the library (already sorted by
//! publish date, then label) and renders them as a table, JSON, YAML, or a
//! Markdown pipe table.

use crate::format::OutputFormat;
use libimago::{Availability, CheckedImage};
use serde::Serialize;
use tabled::{Table, Tabled};


/// One line of the availability report.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "Source")]
    pub source: String,
    #[tabled(rename = "Image")]
    pub image: String,
    #[tabled(rename = "Version")]
    pub version: String,
    #[tabled(rename = "Status")]
    pub status: Availability,
    #[tabled(rename = "Last Published")]
    pub last_published: String,
}

impl From<&CheckedImage> for ReportRow {
    fn from(checked: &CheckedImage) -> Self {
        Self {
            source: checked.source.clone(),
            image: checked.image_tag(),
            version: checked.reference.tag().to_string(),
            status: checked.result.availability,
            last_published: checked.result.last_published_date(),
        }
    }
}

/// Renders checked rows in the requested output format.
pub fn render(checked: &[CheckedImage], format: OutputFormat) -> Result<String, String> {
    let rows: Vec<ReportRow> = checked.iter().map(ReportRow::from).collect();

    match format {
        OutputFormat::Pretty => Ok(Table::new(&rows).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&rows)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&rows).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
        OutputFormat::Markdown => Ok(render_markdown(&rows)),
    }
}

fn render_markdown(rows: &[ReportRow]) -> String {
    let mut out = String::from(
        "| Source | Image | Version | Status | Last Published |\n|---|---|---|---|---|\n",
    );
    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            row.source, row.image, row.version, row.status, row.last_published
        ));
    }
    out
}
