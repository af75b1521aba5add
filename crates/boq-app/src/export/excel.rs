//! Excel export functionality

use boq_domain::{CategorySection, CostReport};
use boq_types::{round_half_away_from_zero, Error, Result};
use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use tracing::info;

use super::TABLE_HEADERS;

fn xlsx_err(e: XlsxError) -> Error {
    Error::Export(e.to_string())
}

/// Export a cost report to an Excel workbook
pub fn export_to_excel(report: &CostReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let materials_sheet = workbook.add_worksheet();
    write_materials_sheet(materials_sheet, report)?;

    workbook.save(output_path).map_err(xlsx_err)?;
    info!(path = %output_path.display(), "Excel report written");

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &CostReport) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Bill of Quantities", &header_format)
        .map_err(xlsx_err)?;
    sheet.write_string(2, 0, "Generated:").map_err(xlsx_err)?;
    sheet
        .write_string(2, 1, Utc::now().to_rfc3339())
        .map_err(xlsx_err)?;

    let p = &report.prediction;
    let rows: [(&str, f64); 9] = [
        ("Square Feet", f64::from(p.square_feet)),
        ("Kitchen", 1.0),
        ("Living Room", 1.0),
        ("Beds", f64::from(p.beds)),
        ("Baths", f64::from(p.baths)),
        ("Garages", f64::from(p.garages)),
        ("Cost (USD)", round_half_away_from_zero(report.total_estimated_cost)),
        ("Labour Cost (USD)", report.labour_cost),
        ("Materials Total (USD)", round_half_away_from_zero(report.materials_total)),
    ];

    for (offset, (label, value)) in rows.iter().enumerate() {
        let row = 4 + offset as u32;
        sheet.write_string(row, 0, *label).map_err(xlsx_err)?;
        sheet.write_number(row, 1, *value).map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 24).map_err(xlsx_err)?;
    sheet.set_column_width(1, 28).map_err(xlsx_err)?;

    Ok(())
}

/// One titled table per section, separated by a blank row
fn write_materials_sheet(sheet: &mut Worksheet, report: &CostReport) -> Result<()> {
    sheet.set_name("Materials").map_err(xlsx_err)?;

    let title_format = Format::new().set_bold().set_font_size(12);
    let header_format = Format::new().set_bold();
    let price_format = Format::new().set_num_format("0.00");

    let mut row: u32 = 0;
    for section in &report.sections {
        row = write_section(sheet, row, section, &title_format, &header_format, &price_format)?;
        row += 1;
    }

    sheet.set_column_width(0, 24).map_err(xlsx_err)?;
    for col in 1..TABLE_HEADERS.len() as u16 {
        sheet.set_column_width(col, 16).map_err(xlsx_err)?;
    }

    Ok(())
}

/// Returns the first row after the section
fn write_section(
    sheet: &mut Worksheet,
    start_row: u32,
    section: &CategorySection,
    title_format: &Format,
    header_format: &Format,
    price_format: &Format,
) -> Result<u32> {
    sheet
        .write_string_with_format(start_row, 0, section.title(), title_format)
        .map_err(xlsx_err)?;

    let header_row = start_row + 1;
    for (col, header) in TABLE_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(header_row, col as u16, *header, header_format)
            .map_err(xlsx_err)?;
    }

    let mut row = header_row + 1;
    for (item, display) in section.items.iter().zip(section.display_rows()) {
        sheet.write_string(row, 0, &display.material).map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 1, item.unit_price, price_format)
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 2, display.quantity as f64)
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 3, display.cost as f64)
            .map_err(xlsx_err)?;
        row += 1;
    }

    Ok(row)
}
