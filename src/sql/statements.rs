//! Statement generation for the company table
//!
//! Generates the MySQL statements the store runs. Values are always `?`
//! placeholders; the only interpolated text is the configured table name,
//! which is validated and quoted.

use crate::config::StoreConfig;
use crate::sql::clause::SqlClause;
use crate::sql::sanitize::quote_identifier;

const SELECT_COLUMNS: &str = "select name, id from";

/// Statement generator for the company table
pub struct CompanyStatements<'a> {
    config: &'a StoreConfig,
}

impl<'a> CompanyStatements<'a> {
    pub fn new(config: &'a StoreConfig) -> Self {
        Self { config }
    }

    fn table(&self) -> String {
        quote_identifier(&self.config.company_table)
    }

    /// `update ... set name = ? where id = ?`
    pub fn update_name(&self) -> String {
        format!("update {} set name = ? where id = ?", self.table())
    }

    pub fn select_all(&self) -> String {
        format!("{} {} order by name desc", SELECT_COLUMNS, self.table())
    }

    /// Substring match on name, binding the search term once
    pub fn select_name_contains(&self) -> String {
        format!(
            "{} {} where name like concat('%', ?, '%') order by name asc",
            SELECT_COLUMNS,
            self.table()
        )
    }

    pub fn select_by_id(&self) -> String {
        format!("{} {} where id = ?", SELECT_COLUMNS, self.table())
    }

    pub fn select_by_name(&self) -> String {
        format!("{} {} where name = ?", SELECT_COLUMNS, self.table())
    }

    pub fn insert(&self) -> String {
        format!("insert into {} (name) values (?)", self.table())
    }

    /// Base select with a sort/paging clause appended
    pub fn select_with_clause(&self, clause: &SqlClause) -> String {
        let base = format!("{} {}", SELECT_COLUMNS, self.table());
        if clause.is_empty() {
            base
        } else {
            format!("{} {}", base, clause.sql())
        }
    }
}
