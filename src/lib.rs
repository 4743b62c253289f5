//! # company-store
//!
//! MySQL data access for a `company(id, name)` table, plus a helper that turns
//! untrusted sort and paging parameters into a safe SQL suffix.
//!
//! ## Features
//!
//! - **Safe Ordering**: Sort columns are checked against a per-entity whitelist;
//!   anything else is dropped before it can reach SQL text
//! - **Parameterized Paging**: Limits and offsets are always bind parameters
//! - **Degrade, Don't Fail**: Invalid sort or paging input shrinks the clause
//!   instead of failing the query
//! - **Company CRUD**: Insert, rename, look up and list companies
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use company_store::{CompanyStore, OrderBy, QueryMeta, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = CompanyStore::new(StoreConfig::from_env()).await?;
//!
//!     store.insert_company("Acme").await?;
//!
//!     // "order by name asc limit ?, ?" with params ["0", "10"];
//!     // the unknown column is silently left out
//!     let meta = QueryMeta::new()
//!         .limit(10)
//!         .order_by(OrderBy::asc("name"))
//!         .order_by(OrderBy::desc("password"));
//!     let companies = store.list_companies(&meta).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building Clauses Directly
//!
//! Any type implementing [`ColumnNames`], including a closure returning the
//! column list, can act as the whitelist:
//!
//! ```rust
//! use company_store::{OrderBy, QueryMeta};
//!
//! let columns = || vec!["abc".to_string(), "def".to_string()];
//! let clause = QueryMeta::new()
//!     .order_by(OrderBy::asc("abc"))
//!     .order_by(OrderBy::desc("123"))
//!     .sql_clause(&columns);
//!
//! assert_eq!(clause.sql(), "order by abc asc");
//! assert!(clause.params().is_empty());
//! ```

pub mod company;
pub mod config;
pub mod error;
pub mod sql;
pub mod store;

pub use company::{COMPANY_SORT_COLUMNS, Company, CompanyColumns};
pub use config::{StoreConfig, StoreConfigBuilder};
pub use error::{Result, StoreError};
pub use sql::clause::{PlaceholderStyle, SqlClause};
pub use sql::query_meta::{ColumnNames, OrderBy, QueryMeta, Rejection, SortRejection};
pub use store::CompanyStore;
