//! Output formatting module

use boq_app::app::BatchResults;
use boq_domain::CostReport;
use boq_types::{round_half_away_from_zero, OutputFormat, Result};

/// Label column of the estimation summary, widest label plus one space
const SUMMARY_LABEL_WIDTH: usize = 19;

pub fn output_report(output_format: OutputFormat, report: &CostReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        print!("{}", render_table(report));
    }

    Ok(())
}

/// Plain-text rendering of the report: estimation summary, then one table
/// per section
pub fn render_table(report: &CostReport) -> String {
    let p = &report.prediction;
    let mut out = String::new();

    out.push_str("\nEstimations\n");
    out.push_str("===========\n");
    let summary: [(&str, String); 9] = [
        ("Square feet:", p.square_feet.to_string()),
        ("Kitchen:", "1".to_string()),
        ("Living room:", "1".to_string()),
        ("Beds:", p.beds.to_string()),
        ("Baths:", p.baths.to_string()),
        ("Garages:", p.garages.to_string()),
        (
            "Cost (USD):",
            format!("${}", round_half_away_from_zero(report.total_estimated_cost) as i64),
        ),
        ("Labour cost (USD):", format!("${}", report.labour_cost as i64)),
        (
            "Materials (USD):",
            format!("${}", round_half_away_from_zero(report.materials_total) as i64),
        ),
    ];
    for (label, value) in &summary {
        out.push_str(&format!("{:<width$}{}\n", label, value, width = SUMMARY_LABEL_WIDTH));
    }

    for section in &report.sections {
        out.push('\n');
        out.push_str(section.title());
        out.push('\n');
        out.push_str(&"-".repeat(66));
        out.push('\n');
        out.push_str(&format!(
            "{:<22} {:>16} {:>12} {:>12}\n",
            "Material", "Unit Price (USD)", "Quantity", "Cost (USD)"
        ));
        out.push_str(&"-".repeat(66));
        out.push('\n');
        for row in section.display_rows() {
            out.push_str(&format!(
                "{:<22} {:>16} {:>12} {:>12}\n",
                row.material, row.unit_price, row.quantity, row.cost
            ));
        }
    }

    out
}

pub fn output_batch(output_format: OutputFormat, results: &BatchResults) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("\nBatch Results");
    println!("=============");
    for entry in &results.entries {
        match (&entry.report, &entry.error) {
            (Some(report), _) => println!(
                "OK    {}  {} sq ft, cost ${}, labour ${}",
                entry.image_path,
                report.prediction.square_feet,
                round_half_away_from_zero(report.total_estimated_cost) as i64,
                report.labour_cost as i64
            ),
            (None, error) => println!(
                "FAIL  {}  {}",
                entry.image_path,
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
    println!(
        "\nTotal: {}  Successful: {}  Failed: {}",
        results.entries.len(),
        results.successful(),
        results.failed()
    );

    Ok(())
}
