//! Constants for quantity take-off

pub mod rates;

pub use rates::{LABOUR_RATE, ROOM_ALLOWANCE};
