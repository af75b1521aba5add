//! Report export (Excel workbook, CSV)
//!
//! Exporters only read the report; a failed export leaves it untouched.

pub mod csv;
pub mod excel;

pub use self::csv::{export_to_csv, write_csv};
pub use self::excel::export_to_excel;

use boq_domain::CostReport;
use boq_types::{Error, Result};
use std::path::Path;

/// Column headers shared by every exported table
pub const TABLE_HEADERS: [&str; 4] = ["Material", "Unit Price (USD)", "Quantity", "Cost (USD)"];

/// Export a report, choosing the format from the file extension
pub fn export_report(report: &CostReport, output_path: &Path) -> Result<()> {
    let ext = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("xlsx") => export_to_excel(report, output_path),
        Some("csv") => export_to_csv(report, output_path),
        _ => Err(Error::Export(format!(
            "Unsupported export format: {} (expected .xlsx or .csv)",
            output_path.display()
        ))),
    }
}
