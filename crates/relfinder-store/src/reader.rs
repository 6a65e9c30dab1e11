//! Paged reading of relatedness rows

use crate::StoreError;
use relfinder_domain::RelatednessRow;
use rusqlite::types::Value;
use rusqlite::{Row, Rows};

/// Lazy batches of at most `page_size` rows over an executed statement
///
/// The sequence is finite and cannot be restarted: it ends at the first
/// empty fetch, and after an error it yields nothing more.
pub struct RowPages<'stmt> {
    rows: Option<Rows<'stmt>>,
    page_size: usize,
}

impl<'stmt> RowPages<'stmt> {
    /// Wrap the cursor of an executed statement
    pub fn new(rows: Rows<'stmt>, page_size: usize) -> Result<Self, StoreError> {
        if page_size == 0 {
            return Err(StoreError::InvalidInput(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            rows: Some(rows),
            page_size,
        })
    }

    fn fetch_page(rows: &mut Rows<'stmt>, page_size: usize) -> Result<Vec<RelatednessRow>, StoreError> {
        let mut page = Vec::with_capacity(page_size);
        while page.len() < page_size {
            match rows.next()? {
                Some(row) => page.push(relatedness_row(row)?),
                None => break,
            }
        }
        Ok(page)
    }
}

impl Iterator for RowPages<'_> {
    type Item = Result<Vec<RelatednessRow>, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rows = self.rows.as_mut()?;
        match Self::fetch_page(rows, self.page_size) {
            Ok(page) if page.is_empty() => {
                self.rows = None;
                None
            }
            Ok(page) => Some(Ok(page)),
            Err(e) => {
                self.rows = None;
                Some(Err(e))
            }
        }
    }
}

/// Map a `(row_id, ID1, ID2, estimated_relatedness)` row
fn relatedness_row(row: &Row<'_>) -> rusqlite::Result<RelatednessRow> {
    Ok(RelatednessRow {
        row_id: row.get(0)?,
        id1: identifier_at(row, 1)?,
        id2: identifier_at(row, 2)?,
        estimated_relatedness: row.get(3)?,
    })
}

/// Identifier columns may be stored as TEXT or INTEGER
fn identifier_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    match row.get::<_, Value>(idx)? {
        Value::Text(s) => Ok(s),
        Value::Integer(i) => Ok(i.to_string()),
        other => Err(rusqlite::Error::InvalidColumnType(
            idx,
            row.as_ref().column_name(idx)?.to_string(),
            other.data_type(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn table_with_rows(n: i64) -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE ersa (row_id INTEGER PRIMARY KEY, ID1 TEXT, ID2 TEXT, estimated_relatedness INTEGER);",
        )
        .unwrap();
        for i in 0..n {
            conn.execute(
                "INSERT INTO ersa (row_id, ID1, ID2, estimated_relatedness) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![i, format!("a{}", i), format!("b{}", i), i % 10],
            )
            .unwrap();
        }
        conn
    }

    fn page_sizes(conn: &Connection, page_size: usize) -> Vec<usize> {
        let mut stmt = conn.prepare("SELECT * FROM ersa").unwrap();
        let rows = stmt.query([]).unwrap();
        RowPages::new(rows, page_size)
            .unwrap()
            .map(|page| page.unwrap().len())
            .collect()
    }

    #[test]
    fn test_pages_of_forty() {
        let conn = table_with_rows(100);
        assert_eq!(page_sizes(&conn, 40), vec![40, 40, 20]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let conn = table_with_rows(80);
        assert_eq!(page_sizes(&conn, 40), vec![40, 40]);
    }

    #[test]
    fn test_empty_result_yields_no_pages() {
        let conn = table_with_rows(0);
        assert!(page_sizes(&conn, 40).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let conn = table_with_rows(1);
        let mut stmt = conn.prepare("SELECT * FROM ersa").unwrap();
        let rows = stmt.query([]).unwrap();
        assert!(matches!(
            RowPages::new(rows, 0),
            Err(StoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_integer_identifiers_are_read_as_text() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE ersa (row_id INTEGER, ID1, ID2, estimated_relatedness INTEGER);
             INSERT INTO ersa VALUES (1, 1001, 'R2', 3);",
        )
        .unwrap();
        let mut stmt = conn.prepare("SELECT * FROM ersa").unwrap();
        let rows = stmt.query([]).unwrap();
        let pages: Vec<_> = RowPages::new(rows, 10).unwrap().collect::<Result<_, _>>().unwrap();
        assert_eq!(pages, vec![vec![RelatednessRow::new(1, "1001", "R2", 3)]]);
    }
}
