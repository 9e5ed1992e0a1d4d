//! Generic SQL repository shared by every catalog table.
//!
//! A table opts in by implementing [`Record`], which describes its columns
//! and how to bind its writable fields. [`SqlRepository`] then provides the
//! whole [`Repository`] contract once, for any record.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use tracing::debug;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::Repository;

use crate::error::map_sqlx_error;

/// A query returning rows of `R`, as produced by `sqlx::query_as`.
pub type RecordQuery<'q, R> = QueryAs<'q, Sqlite, R, SqliteArguments<'q>>;

/// Table metadata and field binding for a persisted entity.
pub trait Record:
    for<'r> FromRow<'r, SqliteRow> + serde::Serialize + Send + Sync + Unpin + 'static
{
    /// Human-readable entity name used in messages.
    const ENTITY: &'static str;
    /// Table name.
    const TABLE: &'static str;
    /// Primary key column, assigned by storage.
    const ID_COLUMN: &'static str;
    /// Column searched by `find_by_name` and used for ordering.
    const NAME_COLUMN: &'static str;
    /// Writable columns, in the order [`Record::bind_fields`] binds them.
    const COLUMNS: &'static [&'static str];

    /// Primary key value.
    fn id(&self) -> i64;

    /// Bind the values of [`Record::COLUMNS`], in order.
    fn bind_fields<'q>(&'q self, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self>;
}

/// Escape `LIKE` wildcards so `fragment` matches literally, and wrap it
/// for a substring match. Pair with `ESCAPE '\'`.
pub fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// SQL text for one record type, rendered once at construction.
#[derive(Debug, Clone)]
struct Statements {
    select_all: String,
    select_by_id: String,
    select_by_name: String,
    insert: String,
    update: String,
    delete: String,
}

impl Statements {
    fn for_record<R: Record>() -> Self {
        let table = R::TABLE;
        let id = R::ID_COLUMN;
        let name = R::NAME_COLUMN;
        let columns = R::COLUMNS.join(", ");
        let placeholders = vec!["?"; R::COLUMNS.len()].join(", ");
        let assignments = R::COLUMNS
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            select_all: format!("SELECT * FROM {table} ORDER BY {name}"),
            select_by_id: format!("SELECT * FROM {table} WHERE {id} = ?"),
            select_by_name: format!(
                "SELECT * FROM {table} WHERE {name} LIKE ? ESCAPE '\\' ORDER BY {name}"
            ),
            insert: format!("INSERT INTO {table} ({columns}) VALUES ({placeholders}) RETURNING *"),
            update: format!("UPDATE {table} SET {assignments} WHERE {id} = ? RETURNING *"),
            delete: format!("DELETE FROM {table} WHERE {id} = ?"),
        }
    }
}

/// [`Repository`] implementation backed by a SQLite pool.
pub struct SqlRepository<R> {
    pub(crate) pool: SqlitePool,
    sql: Statements,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> SqlRepository<R> {
    /// Create a new repository over `pool`.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            sql: Statements::for_record::<R>(),
            _record: PhantomData,
        }
    }

    /// The error reported when no row has primary key `id`.
    pub fn not_found(id: i64) -> AppError {
        AppError::not_found(format!("{} {id} not found", R::ENTITY))
    }
}

impl<R> Clone for SqlRepository<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            sql: self.sql.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> fmt::Debug for SqlRepository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlRepository")
            .field("table", &R::TABLE)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<R: Record> Repository<R, i64> for SqlRepository<R> {
    async fn find_all(&self) -> AppResult<Vec<R>> {
        debug!(table = R::TABLE, "Listing rows");
        sqlx::query_as::<_, R>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&format!("Failed to list {}", R::TABLE), e))
    }

    async fn find_by_id(&self, id: &i64) -> AppResult<Option<R>> {
        debug!(table = R::TABLE, id, "Finding row by id");
        sqlx::query_as::<_, R>(&self.sql.select_by_id)
            .bind(*id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&format!("Failed to find {}", R::ENTITY), e))
    }

    async fn find_by_name(&self, fragment: &str) -> AppResult<Vec<R>> {
        debug!(table = R::TABLE, fragment, "Searching rows by name");
        sqlx::query_as::<_, R>(&self.sql.select_by_name)
            .bind(contains_pattern(fragment))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&format!("Failed to search {}", R::TABLE), e))
    }

    async fn create(&self, entity: &R) -> AppResult<R> {
        let created = entity
            .bind_fields(sqlx::query_as::<_, R>(&self.sql.insert))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&format!("Failed to create {}", R::ENTITY), e))?;

        debug!(table = R::TABLE, id = created.id(), "Row created");
        Ok(created)
    }

    async fn update(&self, entity: &R) -> AppResult<R> {
        let id = entity.id();
        debug!(table = R::TABLE, id, "Updating row");

        entity
            .bind_fields(sqlx::query_as::<_, R>(&self.sql.update))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&format!("Failed to update {}", R::ENTITY), e))?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn delete(&self, id: &i64) -> AppResult<()> {
        debug!(table = R::TABLE, id, "Deleting row");

        let result = sqlx::query(&self.sql.delete)
            .bind(*id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&format!("Failed to delete {}", R::ENTITY), e))?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(*id));
        }
        Ok(())
    }
}
