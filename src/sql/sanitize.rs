//! SQL Identifier Sanitization Utilities
//!
//! Quoting and validation for MySQL identifiers that come from configuration
//! rather than from request input.

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

/// MySQL reserved keywords that cannot be used as unquoted identifiers
///
/// Not exhaustive; covers the words most likely to be picked as table names.
pub const MYSQL_RESERVED_WORDS: &[&str] = &[
    "ADD",
    "ALL",
    "ALTER",
    "AND",
    "AS",
    "ASC",
    "BETWEEN",
    "BY",
    "CASE",
    "CHECK",
    "COLUMN",
    "CONDITION",
    "CONSTRAINT",
    "CREATE",
    "CROSS",
    "DATABASE",
    "DEFAULT",
    "DELETE",
    "DESC",
    "DISTINCT",
    "DROP",
    "ELSE",
    "EXISTS",
    "FALSE",
    "FOR",
    "FOREIGN",
    "FROM",
    "GRANT",
    "GROUP",
    "HAVING",
    "IN",
    "INDEX",
    "INNER",
    "INSERT",
    "INTERVAL",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "KEYS",
    "LEFT",
    "LIKE",
    "LIMIT",
    "LOCK",
    "NOT",
    "NULL",
    "ON",
    "OR",
    "ORDER",
    "OUTER",
    "PRIMARY",
    "RANGE",
    "REFERENCES",
    "RENAME",
    "REPLACE",
    "RIGHT",
    "SCHEMA",
    "SELECT",
    "SET",
    "SHOW",
    "TABLE",
    "THEN",
    "TO",
    "TRUE",
    "UNION",
    "UNIQUE",
    "UPDATE",
    "USE",
    "USING",
    "VALUES",
    "WHEN",
    "WHERE",
    "WITH",
];

/// Quote a MySQL identifier
///
/// # Example
/// ```
/// use company_store::sql::quote_identifier;
///
/// assert_eq!(quote_identifier("company"), "`company`");
/// ```
pub fn quote_identifier(identifier: &str) -> String {
    // Backticks inside an identifier are escaped by doubling
    let escaped = identifier.replace('`', "``");
    format!("`{}`", escaped)
}

/// Validate a table name
///
/// Rules:
/// - Must start with a letter (a-z)
/// - Can only contain lowercase letters, numbers, and underscores
/// - Cannot be a MySQL reserved word
///
/// # Example
/// ```
/// use company_store::sql::validate_identifier;
///
/// assert!(validate_identifier("company").is_ok());
/// assert!(validate_identifier("order").is_err());
/// ```
pub fn validate_identifier(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Identifier cannot be empty".to_string());
    }

    if !IDENTIFIER_PATTERN.is_match(name) {
        return Err(format!(
            "Identifier '{}' is invalid. Must start with a lowercase letter and contain only lowercase letters, numbers, and underscores.",
            name
        ));
    }

    if MYSQL_RESERVED_WORDS.contains(&name.to_uppercase().as_str()) {
        return Err(format!(
            "Identifier '{}' is a MySQL reserved keyword and cannot be used.",
            name
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // quote_identifier Tests
    // =========================================================================

    #[test]
    fn test_quote_identifier_simple() {
        assert_eq!(quote_identifier("company"), "`company`");
        assert_eq!(quote_identifier("a"), "`a`");
    }

    #[test]
    fn test_quote_identifier_with_backticks() {
        assert_eq!(quote_identifier("evil`name"), "`evil``name`");
        assert_eq!(quote_identifier("`quoted`"), "```quoted```");
    }

    #[test]
    fn test_quote_identifier_empty() {
        assert_eq!(quote_identifier(""), "``");
    }

    // =========================================================================
    // validate_identifier Tests
    // =========================================================================

    #[test]
    fn test_validate_identifier_valid() {
        assert!(validate_identifier("company").is_ok());
        assert!(validate_identifier("company_2024").is_ok());
        assert!(validate_identifier("t").is_ok());
    }

    #[test]
    fn test_validate_identifier_empty() {
        let result = validate_identifier("");
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_identifier_bad_characters() {
        assert!(validate_identifier("1company").is_err());
        assert!(validate_identifier("_company").is_err());
        assert!(validate_identifier("Company").is_err());
        assert!(validate_identifier("my-table").is_err());
        assert!(validate_identifier("db.company").is_err());
        assert!(validate_identifier("company; drop").is_err());
    }

    #[test]
    fn test_validate_identifier_reserved() {
        let result = validate_identifier("select");
        assert!(result.unwrap_err().contains("reserved keyword"));
        assert!(validate_identifier("order").is_err());
        assert!(validate_identifier("table").is_err());
    }
}
