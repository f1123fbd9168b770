//! Libraries repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::library::Library};

/// Escape LIKE metacharacters so user text only ever matches literally.
/// Must stay in sync with the `ESCAPE '\'` clause in [`LibrariesRepository::search`].
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Clone)]
pub struct LibrariesRepository {
    pool: Pool<Postgres>,
}

impl LibrariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Search libraries whose name contains `query` as a case-insensitive
    /// substring. An empty query matches every library.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Library>> {
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));

        let rows = sqlx::query_as::<_, Library>(
            r"SELECT id, name FROM libraries WHERE LOWER(name) LIKE $1 ESCAPE '\' ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain() {
        assert_eq!(escape_like("law library"), "law library");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
    }

    #[test]
    fn test_escape_like_backslash() {
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_escape_like_empty() {
        assert_eq!(escape_like(""), "");
    }
}
