//! relfinder Storage Layer
//!
//! Reads pairwise relatedness estimates out of a SQLite file.
//!
//! # Architecture
//!
//! - [`RelatednessQuery`] builds the `SELECT` with inlined `IN (...)` lists
//! - [`RowPages`] walks the cursor in bounded batches
//! - [`SqliteStore`] owns one read-only connection per logical operation
//! - [`fetch_cohort`] runs the case and control lookups concurrently
//!
//! # Examples
//!
//! ```no_run
//! use relfinder_domain::{PairScope, RelatednessSource};
//! use relfinder_store::SqliteStore;
//!
//! let mut store = SqliteStore::open("ersa.db", "ersa").unwrap();
//! let ids = vec!["R1".to_string(), "R2".to_string()];
//! let total = store
//!     .read_pages(&ids, PairScope::Within, 40, &mut |page| println!("{} rows", page.len()))
//!     .unwrap();
//! println!("{} rows in total", total);
//! ```

#![warn(missing_docs)]

mod fanout;
mod query;
mod reader;

pub use fanout::{fetch_cohort, CohortRows};
pub use query::{validate_table_name, RelatednessQuery};
pub use reader::RowPages;

use relfinder_domain::{Identifier, PairScope, RelatednessRow, RelatednessSource};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use thiserror::Error;

/// Default number of rows fetched per page
pub const DEFAULT_PAGE_SIZE: usize = 40;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error (connection, malformed query, bad column types)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid query input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A concurrent lookup task did not complete
    #[error("Worker error: {0}")]
    Worker(String),
}

/// SQLite-backed relatedness table
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each task opens its own store.
pub struct SqliteStore {
    conn: Connection,
    table: String,
}

impl SqliteStore {
    /// Open an existing database file read-only
    ///
    /// A missing file is an error rather than a new empty database.
    pub fn open<P: AsRef<Path>>(path: P, table: impl Into<String>) -> Result<Self, StoreError> {
        tracing::info!(
            "Attempting to connect to the database at {}",
            path.as_ref().display()
        );
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        let store = Self::from_connection(conn, table)?;
        tracing::info!(
            "Successfully connected to the database at {}",
            path.as_ref().display()
        );
        Ok(store)
    }

    /// Wrap an already open connection
    pub fn from_connection(conn: Connection, table: impl Into<String>) -> Result<Self, StoreError> {
        let table = table.into();
        validate_table_name(&table)?;
        Ok(Self { conn, table })
    }

    /// Name of the relatedness table
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Run a built query and hand its rows to `on_page` in batches
    ///
    /// The statement and its cursor live only for this call.
    pub fn query_pages<F>(
        &self,
        query: &RelatednessQuery,
        page_size: usize,
        mut on_page: F,
    ) -> Result<usize, StoreError>
    where
        F: FnMut(Vec<RelatednessRow>),
    {
        let mut stmt = self.conn.prepare(query.sql())?;
        let rows = stmt.query([])?;

        let mut total = 0;
        for page in RowPages::new(rows, page_size)? {
            let page = page?;
            total += page.len();
            tracing::debug!("Fetched a page of {} rows ({} so far)", page.len(), total);
            on_page(page);
        }

        tracing::debug!("Returning {} results from the database", total);
        Ok(total)
    }

    /// Collect every row of a lookup, reading page by page
    pub fn collect_rows(
        &self,
        ids: &[Identifier],
        scope: PairScope,
        page_size: usize,
    ) -> Result<Vec<RelatednessRow>, StoreError> {
        let query = RelatednessQuery::build(ids, &self.table, scope)?;
        let mut rows = Vec::new();
        self.query_pages(&query, page_size, |page| rows.extend(page))?;
        Ok(rows)
    }
}

impl RelatednessSource for SqliteStore {
    type Error = StoreError;

    fn read_pages(
        &mut self,
        ids: &[Identifier],
        scope: PairScope,
        page_size: usize,
        on_page: &mut dyn FnMut(Vec<RelatednessRow>),
    ) -> Result<usize, Self::Error> {
        let query = RelatednessQuery::build(ids, &self.table, scope)?;
        self.query_pages(&query, page_size, on_page)
    }
}
