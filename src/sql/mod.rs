//! SQL utilities for the company store
//!
//! Provides clause building, statement generation and identifier sanitization.

pub mod clause;
pub mod query_meta;
pub mod sanitize;
pub mod statements;

pub use clause::{PlaceholderStyle, SqlClause};
pub use query_meta::{ColumnNames, OrderBy, QueryMeta, Rejection, SortRejection};
pub use sanitize::{MYSQL_RESERVED_WORDS, quote_identifier, validate_identifier};
pub use statements::CompanyStatements;
