//! Command handlers

use crate::cli::{Cli, Commands, ExportArgs};
use crate::output::{output_batch, output_report};
use boq_app::app;
use boq_app::config::Config;
use boq_app::export::{export_report, export_to_csv, export_to_excel};
use boq_app::predictor::HttpPredictor;
use boq_app::scanner::scan_directory;
use boq_domain::CostReport;
use boq_types::{Error, OutputFormat, PredictionPayload, Result, StructuralPrediction};
use std::path::PathBuf;
use tracing::info;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let Cli {
        command,
        predictor_url,
        format,
        ..
    } = cli;

    // Stored config plus command-line overrides. `config` does not go
    // through here so `--reset` still works on a corrupt file.
    let settings = || -> Result<(Config, OutputFormat)> {
        let mut config = Config::load()?;
        if let Some(url) = predictor_url.clone() {
            config.predictor_url = url;
        }
        let output_format = format.unwrap_or(config.output_format);
        Ok((config, output_format))
    };

    match command {
        Commands::Estimate { image, export } => {
            let (config, output_format) = settings()?;
            let predictor = HttpPredictor::from_config(&config)?;
            info!(url = predictor.url(), "using prediction service");
            let report = app::estimate_image_file(&predictor, &image)?;
            present(output_format, &report, &export)
        }

        Commands::Calc {
            square_feet,
            beds,
            baths,
            garages,
            estimated_cost,
            export,
        } => {
            let (_, output_format) = settings()?;
            let prediction =
                StructuralPrediction::new(square_feet, beds, baths, garages, estimated_cost)?;
            let report = app::estimate(Some(&prediction))?;
            present(output_format, &report, &export)
        }

        Commands::FromJson { file, export } => {
            let (_, output_format) = settings()?;
            if !file.exists() {
                return Err(Error::FileNotFound(file.display().to_string()));
            }
            let content = std::fs::read_to_string(&file)?;
            let report = app::estimate_payload(PredictionPayload::from_json(&content)?)?;
            present(output_format, &report, &export)
        }

        Commands::Batch { folder, output } => {
            let (config, output_format) = settings()?;
            cmd_batch(&config, folder, output, output_format)
        }

        Commands::Export { report, output } => cmd_export(report, output),

        Commands::Config {
            show,
            set_predictor_url,
            set_timeout,
            set_output,
            reset,
        } => cmd_config(show, set_predictor_url, set_timeout, set_output, reset),
    }
}

/// Print the report, then write any requested exports
fn present(output_format: OutputFormat, report: &CostReport, export: &ExportArgs) -> Result<()> {
    output_report(output_format, report)?;

    if let Some(ref path) = export.export {
        export_to_excel(report, path)?;
        eprintln!("Exported to: {}", path.display());
    }
    if let Some(ref path) = export.csv {
        export_to_csv(report, path)?;
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

fn cmd_batch(
    config: &Config,
    folder: PathBuf,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let images = scan_directory(&folder)?;
    if images.is_empty() {
        eprintln!("No images found in {}", folder.display());
        return Ok(());
    }
    info!(count = images.len(), folder = %folder.display(), "starting batch");

    let predictor = HttpPredictor::from_config(config)?;
    let results = app::estimate_batch(&predictor, &images);

    output_batch(output_format, &results)?;

    if let Some(path) = output {
        let content = serde_json::to_string_pretty(&results)?;
        std::fs::write(&path, content)?;
        eprintln!("Results saved to: {}", path.display());
    }

    Ok(())
}

fn cmd_export(report_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !report_path.exists() {
        return Err(Error::FileNotFound(report_path.display().to_string()));
    }

    let content = std::fs::read_to_string(&report_path)?;
    let report: CostReport = serde_json::from_str(&content)?;

    let output_path = output.unwrap_or_else(|| report_path.with_extension("xlsx"));
    export_report(&report, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_predictor_url: Option<String>,
    set_timeout: Option<u64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(url) = set_predictor_url {
        config.predictor_url = url;
        changed = true;
    }

    if let Some(timeout) = set_timeout {
        config.request_timeout_secs = timeout;
        changed = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
