use async_trait::async_trait;

use crate::categories::categories_model::{
    Category, CategoryKind, CategoryWithSubcategories, NewCategory, NewSubcategory, Subcategory,
};
use crate::errors::Result;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>>;
    fn get_category_by_id(&self, id: i64) -> Result<Option<Category>>;
    /// Inserts the category, or returns the existing row with the same name and kind.
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;

    fn get_subcategories(&self, category_id: Option<i64>) -> Result<Vec<Subcategory>>;
    fn get_subcategory_by_id(&self, id: i64) -> Result<Option<Subcategory>>;
    async fn create_subcategory(&self, new_subcategory: NewSubcategory) -> Result<Subcategory>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>>;
    fn get_categories_with_subcategories(
        &self,
        kind: Option<CategoryKind>,
    ) -> Result<Vec<CategoryWithSubcategories>>;
    fn get_category(&self, id: i64) -> Result<Option<Category>>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;

    fn get_subcategories(&self, category_id: i64) -> Result<Vec<Subcategory>>;
    fn get_subcategory(&self, id: i64) -> Result<Option<Subcategory>>;
    async fn create_subcategory(&self, new_subcategory: NewSubcategory) -> Result<Subcategory>;

    /// Checks that `category_id` exists and, when given, that `subcategory_id`
    /// exists and belongs to it. Returns a `ReferenceError` otherwise.
    fn validate_references(&self, category_id: i64, subcategory_id: Option<i64>) -> Result<()>;
}
