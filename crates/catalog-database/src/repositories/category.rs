//! Category repository.

use catalog_entity::category::Category;

use super::crud::{Record, RecordQuery, SqlRepository};

/// Repository for category CRUD operations.
pub type CategoryRepository = SqlRepository<Category>;

impl Record for Category {
    const ENTITY: &'static str = "Category";
    const TABLE: &'static str = "categories";
    const ID_COLUMN: &'static str = "category_id";
    const NAME_COLUMN: &'static str = "category_name";
    const COLUMNS: &'static [&'static str] = &["category_name"];

    fn id(&self) -> i64 {
        self.category_id
    }

    fn bind_fields<'q>(&'q self, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query.bind(&self.category_name)
    }
}
