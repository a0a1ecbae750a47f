//! API Routes

pub mod analyze;
pub mod standards;
