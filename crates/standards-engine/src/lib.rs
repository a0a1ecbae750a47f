//! Vibration Standard Classification
//!
//! Maps standard identifiers to threshold rules and labels measurement
//! records safe (0) or unsafe (1).

mod classify;
mod error;
mod standard;

pub use classify::{classify, ClassificationInput, MM_PER_INCH};
pub use error::ClassifyError;
pub use standard::{Quantity, Rule, Standard};
