//! Sort and paging clauses built from untrusted request input
//!
//! A [`QueryMeta`] carries the limit, offset and sort requests a caller
//! received from the outside world. [`QueryMeta::sql_clause`] turns it into
//! an `order by ... limit ?, ?` suffix. Sort columns cannot be bound as
//! parameters, so they are checked against a whitelist supplied through
//! [`ColumnNames`] and anything not on it is dropped. Invalid pieces never
//! fail the build; they are left out of the clause.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::sql::clause::SqlClause;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Source of the column names a caller may sort by
pub trait ColumnNames {
    /// Columns that may appear in an `order by`, matched case-sensitively
    fn column_names(&self) -> Vec<String>;
}

impl<F> ColumnNames for F
where
    F: Fn() -> Vec<String>,
{
    fn column_names(&self) -> Vec<String> {
        self()
    }
}

/// One requested sort column and direction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    #[serde(default)]
    pub column: String,
    /// `asc` or `desc` in any casing
    #[serde(default, alias = "order")]
    pub direction: String,
}

impl OrderBy {
    pub fn new(column: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: direction.into(),
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, "asc")
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, "desc")
    }
}

/// Paging and ordering requested for a listing query
///
/// A limit of `0` means no limit. The offset only applies alongside a limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryMeta {
    pub limit: i64,
    pub offset: i64,
    #[serde(rename = "orderBy", alias = "order_by")]
    pub order_by: Vec<OrderBy>,
}

/// Why a sort request was left out of the clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRejection {
    /// Column or direction was empty
    EmptyField,
    /// Direction was not `asc` or `desc`
    InvalidDirection,
    /// Column is not in the whitelist
    UnknownColumn,
}

/// A piece of a [`QueryMeta`] that was dropped or adjusted while building
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Sort {
        order_by: OrderBy,
        reason: SortRejection,
    },
    /// Negative limit, treated as no limit
    NegativeLimit(i64),
    /// Negative offset, clamped to zero
    NegativeOffset(i64),
}

impl QueryMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Append a sort request; requests keep the order they are added in
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by.push(order_by);
        self
    }

    /// Build the `order by ... limit ?, ?` clause for this request
    ///
    /// # Example
    /// ```
    /// use company_store::{OrderBy, QueryMeta};
    ///
    /// let columns = || vec!["abc".to_string(), "def".to_string()];
    /// let clause = QueryMeta::new()
    ///     .limit(20)
    ///     .offset(10)
    ///     .order_by(OrderBy::asc("abc"))
    ///     .order_by(OrderBy::desc("def"))
    ///     .sql_clause(&columns);
    ///
    /// assert_eq!(clause.sql(), "order by abc asc, def desc limit ?, ?");
    /// assert_eq!(clause.params(), ["10", "20"]);
    /// ```
    pub fn sql_clause(&self, columns: &impl ColumnNames) -> SqlClause {
        self.sql_clause_with_rejections(columns).0
    }

    /// Build the clause and report every piece of input that was left out
    pub fn sql_clause_with_rejections(
        &self,
        columns: &impl ColumnNames,
    ) -> (SqlClause, Vec<Rejection>) {
        let mut rejections = Vec::new();
        let order_by = self.order_by_sql(columns, &mut rejections);
        let limit = self.limit_clause(&mut rejections);

        let joined = format!("{} {}", order_by, limit.sql());
        let sql = WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string();

        (SqlClause::new(sql, limit.params().to_vec()), rejections)
    }

    fn order_by_sql(&self, columns: &impl ColumnNames, rejections: &mut Vec<Rejection>) -> String {
        if self.order_by.is_empty() {
            return String::new();
        }

        let valid_columns = columns.column_names();
        let mut parts = Vec::new();

        for requested in &self.order_by {
            match check_sort(requested, &valid_columns) {
                Ok(()) => parts.push(format!("{} {}", requested.column, requested.direction)),
                Err(reason) => {
                    tracing::debug!(
                        column = %requested.column,
                        direction = %requested.direction,
                        ?reason,
                        "dropping sort request"
                    );
                    rejections.push(Rejection::Sort {
                        order_by: requested.clone(),
                        reason,
                    });
                }
            }
        }

        if parts.is_empty() {
            return String::new();
        }
        format!("order by {}", parts.join(", "))
    }

    fn limit_clause(&self, rejections: &mut Vec<Rejection>) -> SqlClause {
        if self.limit < 0 {
            tracing::debug!(limit = self.limit, "ignoring negative limit");
            rejections.push(Rejection::NegativeLimit(self.limit));
            return SqlClause::empty();
        }
        // An offset without a limit means nothing to the database.
        if self.limit == 0 {
            return SqlClause::empty();
        }

        let offset = if self.offset < 0 {
            tracing::debug!(offset = self.offset, "clamping negative offset to zero");
            rejections.push(Rejection::NegativeOffset(self.offset));
            0
        } else {
            self.offset
        };

        SqlClause::new(
            "limit ?, ?",
            vec![offset.to_string(), self.limit.to_string()],
        )
    }
}

fn check_sort(requested: &OrderBy, valid_columns: &[String]) -> Result<(), SortRejection> {
    if requested.column.is_empty() || requested.direction.is_empty() {
        return Err(SortRejection::EmptyField);
    }

    let direction = requested.direction.to_lowercase();
    if direction != "asc" && direction != "desc" {
        return Err(SortRejection::InvalidDirection);
    }

    if !valid_columns.iter().any(|c| *c == requested.column) {
        return Err(SortRejection::UnknownColumn);
    }

    Ok(())
}
