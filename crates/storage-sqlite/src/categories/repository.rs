use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use budgetbuddy_core::categories::{
    Category, CategoryKind, CategoryRepositoryTrait, NewCategory, NewSubcategory, Subcategory,
};
use budgetbuddy_core::Result;

use super::model::{CategoryDB, NewCategoryDB, NewSubcategoryDB, SubcategoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{categories, subcategories};

/// Categories are shared by every user; only their names and kinds are stored.
pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn get_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = categories::table
            .select(CategoryDB::as_select())
            .order((categories::name.asc(), categories::id.asc()))
            .into_boxed();
        if let Some(kind) = kind {
            query = query.filter(categories::kind.eq(kind.as_str()));
        }
        query
            .load::<CategoryDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }

    fn get_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        categories::table
            .find(id)
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Category::try_from)
            .transpose()
    }

    /// Returns the existing category when one with the same name and kind exists.
    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let row: NewCategoryDB = new_category.into();
                let existing = categories::table
                    .filter(categories::name.eq(&row.name))
                    .filter(categories::kind.eq(&row.kind))
                    .select(CategoryDB::as_select())
                    .first::<CategoryDB>(conn)
                    .optional()
                    .into_core()?;
                let category = match existing {
                    Some(category) => category,
                    None => diesel::insert_into(categories::table)
                        .values(&row)
                        .returning(CategoryDB::as_returning())
                        .get_result(conn)
                        .into_core()?,
                };
                Category::try_from(category)
            })
            .await
    }

    fn get_subcategories(&self, category_id: Option<i64>) -> Result<Vec<Subcategory>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = subcategories::table
            .select(SubcategoryDB::as_select())
            .order((subcategories::name.asc(), subcategories::id.asc()))
            .into_boxed();
        if let Some(category_id) = category_id {
            query = query.filter(subcategories::category_id.eq(category_id));
        }
        Ok(query
            .load::<SubcategoryDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Subcategory::from)
            .collect())
    }

    fn get_subcategory_by_id(&self, id: i64) -> Result<Option<Subcategory>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(subcategories::table
            .find(id)
            .select(SubcategoryDB::as_select())
            .first::<SubcategoryDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Subcategory::from))
    }

    /// Returns the existing subcategory when the parent already has one with this name.
    async fn create_subcategory(&self, new_subcategory: NewSubcategory) -> Result<Subcategory> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Subcategory> {
                let row: NewSubcategoryDB = new_subcategory.into();
                let existing = subcategories::table
                    .filter(subcategories::category_id.eq(row.category_id))
                    .filter(subcategories::name.eq(&row.name))
                    .select(SubcategoryDB::as_select())
                    .first::<SubcategoryDB>(conn)
                    .optional()
                    .into_core()?;
                let subcategory = match existing {
                    Some(subcategory) => subcategory,
                    None => diesel::insert_into(subcategories::table)
                        .values(&row)
                        .returning(SubcategoryDB::as_returning())
                        .get_result(conn)
                        .into_core()?,
                };
                Ok(Subcategory::from(subcategory))
            })
            .await
    }
}
