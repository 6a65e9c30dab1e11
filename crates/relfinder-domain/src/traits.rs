//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pair logic and storage.
//! Implementations live in other crates.

use crate::relatedness::{Identifier, RelatednessRow};

/// Which stored pairs a lookup should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairScope {
    /// Only pairs where both identifiers are listed
    #[default]
    Within,

    /// Any pair touching at least one listed identifier
    Touching,
}

impl PairScope {
    /// Scope from the `all_connections` toggle
    pub fn from_all_connections(all_connections: bool) -> Self {
        if all_connections {
            PairScope::Touching
        } else {
            PairScope::Within
        }
    }
}

/// Trait for reading relatedness rows in bounded pages
///
/// Implemented by the infrastructure layer (relfinder-store)
pub trait RelatednessSource {
    /// Error type for read operations
    type Error;

    /// Look up rows for `ids`, handing them to `on_page` in batches of at
    /// most `page_size` rows
    ///
    /// Returns the total number of rows read.
    fn read_pages(
        &mut self,
        ids: &[Identifier],
        scope: PairScope,
        page_size: usize,
        on_page: &mut dyn FnMut(Vec<RelatednessRow>),
    ) -> Result<usize, Self::Error>;
}
