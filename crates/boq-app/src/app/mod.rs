//! Application use cases

pub mod estimation_service;

pub use estimation_service::{
    estimate, estimate_batch, estimate_image, estimate_image_file, estimate_payload, BatchEntry,
    BatchResults,
};
