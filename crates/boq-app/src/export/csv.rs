//! CSV export

use boq_domain::CostReport;
use boq_types::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::TABLE_HEADERS;

/// Write one row per line item, prefixed with its section title
pub fn write_csv<W: Write>(report: &CostReport, writer: W) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);

    let mut header = vec!["Section"];
    header.extend_from_slice(&TABLE_HEADERS);
    wtr.write_record(&header)?;

    for section in &report.sections {
        for row in section.display_rows() {
            wtr.write_record([
                section.title().to_string(),
                row.material,
                row.unit_price,
                row.quantity.to_string(),
                row.cost.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_to_csv(report: &CostReport, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(report, file)?;
    info!(path = %output_path.display(), "CSV report written");
    Ok(())
}
