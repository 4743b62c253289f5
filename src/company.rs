//! The company record and the columns it may be sorted by

use serde::{Deserialize, Serialize};

use crate::sql::query_meta::ColumnNames;

/// Columns of the company table that listings may sort by
pub const COMPANY_SORT_COLUMNS: &[&str] = &["id", "name"];

/// A row of the company table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

impl Company {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Sort whitelist for company listings
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyColumns;

impl ColumnNames for CompanyColumns {
    fn column_names(&self) -> Vec<String> {
        COMPANY_SORT_COLUMNS.iter().map(|c| c.to_string()).collect()
    }
}
