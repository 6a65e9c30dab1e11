//! SQL for relatedness lookups
//!
//! Identifiers are inlined as a literal `IN (...)` list. Nothing is escaped,
//! so identifiers holding a single quote and table names that are not plain
//! SQL identifiers are rejected up front.

use crate::StoreError;
use relfinder_domain::{Identifier, PairScope};

/// A built `SELECT` over the relatedness table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatednessQuery {
    sql: String,
}

impl RelatednessQuery {
    /// Build the lookup for `ids`
    ///
    /// `PairScope::Within` joins the two `IN` lists with `AND`,
    /// `PairScope::Touching` with `OR`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relfinder_domain::PairScope;
    /// use relfinder_store::RelatednessQuery;
    ///
    /// let ids = vec!["X".to_string(), "Y".to_string()];
    /// let query = RelatednessQuery::build(&ids, "ersa", PairScope::Within).unwrap();
    /// assert_eq!(
    ///     query.sql(),
    ///     "SELECT * FROM ersa WHERE ID1 IN ('X', 'Y') AND ID2 IN ('X', 'Y');"
    /// );
    /// ```
    pub fn build(ids: &[Identifier], table: &str, scope: PairScope) -> Result<Self, StoreError> {
        if ids.is_empty() {
            return Err(StoreError::InvalidInput(
                "identifier list is empty".to_string(),
            ));
        }
        validate_table_name(table)?;
        if let Some(bad) = ids.iter().find(|id| id.contains('\'')) {
            return Err(StoreError::InvalidInput(format!(
                "identifier contains a quote character: {}",
                bad
            )));
        }

        let list = format!("('{}')", ids.join("', '"));
        let joiner = match scope {
            PairScope::Within => "AND",
            PairScope::Touching => "OR",
        };
        let sql = format!(
            "SELECT * FROM {} WHERE ID1 IN {} {} ID2 IN {};",
            table, list, joiner, list
        );

        tracing::debug!("String used for SQL query:\n{}", sql);
        Ok(Self { sql })
    }

    /// The SQL text
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

/// Check that `table` is a bare SQL identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn validate_table_name(table: &str) -> Result<(), StoreError> {
    let mut chars = table.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidInput(format!(
            "invalid table name: '{}'",
            table
        )))
    }
}
