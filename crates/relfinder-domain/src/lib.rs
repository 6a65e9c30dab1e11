//! relfinder Domain Layer
//!
//! Core model for looking up pairwise relatedness estimates. It has no
//! external dependencies and defines the value types and trait seams that the
//! store, analysis and cli crates build on.
//!
//! ## Key Concepts
//!
//! - **Identifier**: an opaque subject ID (a "grid")
//! - **RelatednessRow**: one stored estimate for a pair of identifiers
//! - **PairMap**: every unordered pair of input identifiers, exactly once
//! - **Cohort**: identifiers split into cases and controls by phenotype
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Storage lives behind [`traits::RelatednessSource`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cohort;
pub mod pairs;
pub mod relatedness;
pub mod traits;

// Re-exports for convenience
pub use cohort::{Cohort, Phenotype};
pub use pairs::{AbsorbStats, PairMap};
pub use relatedness::{Identifier, RelatednessRow, ThresholdedPair};
pub use traits::{PairScope, RelatednessSource};
