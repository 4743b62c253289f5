//! SQL fragments paired with their bind parameters

use sqlx::query::Query;
use sqlx::{Database, Encode, Type};

/// How bind placeholders are written in SQL text
///
/// Clauses are always built with `?`. Databases that number their
/// parameters get the translation through [`SqlClause::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?` markers, as used by MySQL and SQLite
    #[default]
    QuestionMark,
    /// `$1`, `$2`, ... as used by PostgreSQL
    Numbered,
}

/// A SQL fragment with the values to bind to its placeholders
///
/// `params` lines up positionally with the `?` markers in `sql`. Parameters
/// are always bound, never interpolated, so they need no escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlClause {
    sql: String,
    params: Vec<String>,
}

impl SqlClause {
    pub fn new(sql: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// The "no clause" value: empty SQL and no parameters
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Number of `?` markers in the SQL text
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Parameters as borrowed bind values, in placeholder order
    pub fn get_params(&self) -> Vec<&str> {
        self.params.iter().map(String::as_str).collect()
    }

    /// Bind every parameter onto `query`, left to right
    ///
    /// # Example
    /// ```no_run
    /// # async fn run(pool: sqlx::MySqlPool) -> Result<(), sqlx::Error> {
    /// use company_store::SqlClause;
    ///
    /// let clause = SqlClause::new("limit ?, ?", vec!["0".into(), "10".into()]);
    /// let sql = format!("select name, id from company {}", clause.sql());
    /// let rows = clause.bind_params(sqlx::query(&sql)).fetch_all(&pool).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn bind_params<'q, DB>(
        &'q self,
        query: Query<'q, DB, <DB as Database>::Arguments<'q>>,
    ) -> Query<'q, DB, <DB as Database>::Arguments<'q>>
    where
        DB: Database,
        &'q str: Encode<'q, DB> + Type<DB>,
    {
        self.params
            .iter()
            .fold(query, |query, param| query.bind(param.as_str()))
    }

    /// SQL text with placeholders written in `style`
    ///
    /// For [`PlaceholderStyle::Numbered`] the first marker becomes
    /// `$first_index`. Clause text only ever holds keywords, whitelisted
    /// identifiers and markers, so every `?` is a placeholder.
    pub fn render(&self, style: PlaceholderStyle, first_index: usize) -> String {
        match style {
            PlaceholderStyle::QuestionMark => self.sql.clone(),
            PlaceholderStyle::Numbered => {
                let mut rendered = String::with_capacity(self.sql.len() + self.params.len());
                let mut next = first_index;
                for ch in self.sql.chars() {
                    if ch == '?' {
                        rendered.push('$');
                        rendered.push_str(&next.to_string());
                        next += 1;
                    } else {
                        rendered.push(ch);
                    }
                }
                rendered
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit_clause() -> SqlClause {
        SqlClause::new("limit ?, ?", vec!["10".to_string(), "20".to_string()])
    }

    #[test]
    fn test_get_params_count() {
        let clause = SqlClause::new("", vec!["123".to_string(), "abc".to_string()]);
        assert_eq!(clause.get_params().len(), 2);
    }

    #[test]
    fn test_get_params_order() {
        let clause = SqlClause::new("", vec!["123".to_string(), "abc".to_string()]);
        assert_eq!(clause.get_params(), vec!["123", "abc"]);
    }

    #[test]
    fn test_empty_clause() {
        let clause = SqlClause::empty();
        assert!(clause.is_empty());
        assert_eq!(clause.sql(), "");
        assert!(clause.params().is_empty());
        assert_eq!(clause, SqlClause::default());
    }

    #[test]
    fn test_placeholder_count_matches_params() {
        let clause = limit_clause();
        assert_eq!(clause.placeholder_count(), clause.params().len());
    }

    // =========================================================================
    // Placeholder Rendering Tests
    // =========================================================================

    #[test]
    fn test_render_question_mark_is_unchanged() {
        let clause = limit_clause();
        assert_eq!(clause.render(PlaceholderStyle::QuestionMark, 1), "limit ?, ?");
    }

    #[test]
    fn test_render_numbered() {
        let clause = SqlClause::new(
            "order by name desc limit ?, ?",
            vec!["0".to_string(), "5".to_string()],
        );
        assert_eq!(
            clause.render(PlaceholderStyle::Numbered, 1),
            "order by name desc limit $1, $2"
        );
    }

    #[test]
    fn test_render_numbered_with_offset() {
        let clause = limit_clause();
        assert_eq!(
            clause.render(PlaceholderStyle::Numbered, 3),
            "limit $3, $4"
        );
    }

    #[test]
    fn test_render_numbered_without_placeholders() {
        let clause = SqlClause::new("order by id asc", Vec::new());
        assert_eq!(clause.render(PlaceholderStyle::Numbered, 1), "order by id asc");
    }

    #[test]
    fn test_default_style_is_question_mark() {
        assert_eq!(PlaceholderStyle::default(), PlaceholderStyle::QuestionMark);
    }
}
