//! Command implementations.

pub mod determine;
pub mod gather;

pub use self::determine::{execute_determine, report_relatedness};
pub use self::gather::execute_gather;
