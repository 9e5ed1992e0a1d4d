//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// Category and Product share this contract; entity-specific queries live
/// on the concrete repository types.
///
/// Reads return `Ok(None)` / an empty `Vec` when nothing matches. Writes
/// that match no row fail with [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound)
/// instead of silently succeeding.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Find all entities ordered by their name.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Find entities whose name contains `fragment`.
    async fn find_by_name(&self, fragment: &str) -> AppResult<Vec<Entity>>;

    /// Insert a new entity and return it with its storage-assigned id.
    /// The id carried by `entity` is ignored.
    async fn create(&self, entity: &Entity) -> AppResult<Entity>;

    /// Replace every column of the row identified by the entity's id.
    async fn update(&self, entity: &Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key.
    async fn delete(&self, id: &Id) -> AppResult<()>;
}
