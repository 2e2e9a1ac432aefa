//! Search module.
//!
//! Contains the filter criteria, the filter engine and listing results.

mod engine;
mod results;

pub use engine::{filter, FilterCriteria, SpecialTag};
pub use results::Listing;
