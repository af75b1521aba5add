//! Estimation Service - Core Use Case
//!
//! Runs the explicit call graph for one request:
//! 1. Obtain a structural prediction (from the predictor or the caller)
//! 2. Validate it at the boundary
//! 3. Calculate raw material costs
//! 4. Assemble the cost report
//!
//! Each call builds a fresh report; nothing is kept between calls.

use boq_domain::{estimate_costs, CostReport};
use boq_types::{Error, PredictionPayload, Result, StructuralPrediction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};

use crate::predictor::StructuralPredictor;
use crate::scanner::validate_image;

/// Build a report from an already-obtained prediction.
///
/// `None` means the prediction step never produced a result; the
/// calculator is not run.
pub fn estimate(prediction: Option<&StructuralPrediction>) -> Result<CostReport> {
    let prediction = prediction.ok_or_else(|| {
        Error::MissingInput("no prediction was produced for this request".to_string())
    })?;

    debug!(
        square_feet = prediction.square_feet,
        beds = prediction.beds,
        baths = prediction.baths,
        garages = prediction.garages,
        "calculating material costs"
    );
    Ok(estimate_costs(prediction))
}

/// Validate a raw payload and build its report
pub fn estimate_payload(payload: PredictionPayload) -> Result<CostReport> {
    let prediction = StructuralPrediction::try_from(payload)?;
    estimate(Some(&prediction))
}

/// Predict attributes for an image and build its report.
///
/// A failing predictor leaves no prediction to work with and is reported
/// as [`Error::MissingInput`]; a malformed prediction as
/// [`Error::InvalidInput`].
pub fn estimate_image<P>(predictor: &P, image: &[u8]) -> Result<CostReport>
where
    P: StructuralPredictor + ?Sized,
{
    let payload = predictor.predict(image).map_err(|e| {
        warn!(error = %e, "structural prediction failed");
        Error::MissingInput(e.to_string())
    })?;

    let report = estimate_payload(payload)?;
    info!(
        total = report.total_estimated_cost,
        labour = report.labour_cost,
        "estimate ready"
    );
    Ok(report)
}

/// Read an image from disk and estimate it
pub fn estimate_image_file<P>(predictor: &P, path: &Path) -> Result<CostReport>
where
    P: StructuralPredictor + ?Sized,
{
    let _span = info_span!("estimate", image = %path.display()).entered();
    validate_image(path)?;
    let bytes = std::fs::read(path)?;
    estimate_image(predictor, &bytes)
}

/// Outcome for one image of a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub image_path: String,
    #[serde(default)]
    pub report: Option<CostReport>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Results of estimating a folder of images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResults {
    pub started_at: DateTime<Utc>,
    pub entries: Vec<BatchEntry>,
}

impl BatchResults {
    pub fn successful(&self) -> usize {
        self.entries.iter().filter(|e| e.report.is_some()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.successful()
    }
}

/// Estimate every image independently; one failure never affects another
/// image's report.
pub fn estimate_batch<P>(predictor: &P, images: &[PathBuf]) -> BatchResults
where
    P: StructuralPredictor + ?Sized,
{
    let started_at = Utc::now();
    let entries = images
        .iter()
        .map(|path| {
            let image_path = path.display().to_string();
            match estimate_image_file(predictor, path) {
                Ok(report) => BatchEntry {
                    image_path,
                    report: Some(report),
                    error: None,
                },
                Err(e) => {
                    warn!(image = %image_path, error = %e, "estimation failed");
                    BatchEntry {
                        image_path,
                        report: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    BatchResults {
        started_at,
        entries,
    }
}
