//! Application service layer - config, prediction client, scanning, export

pub mod app;
pub mod config;
pub mod export;
pub mod predictor;
pub mod scanner;
