use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::categories::categories_model::{
    Category, CategoryKind, CategoryWithSubcategories, NewCategory, NewSubcategory, Subcategory,
};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{ReferenceError, Result};

pub struct CategoryService<T: CategoryRepositoryTrait> {
    category_repo: Arc<T>,
}

impl<T: CategoryRepositoryTrait> CategoryService<T> {
    pub fn new(category_repo: Arc<T>) -> Self {
        CategoryService { category_repo }
    }

    /// Attaches each subcategory to its parent category.
    fn organize_hierarchically(
        categories: Vec<Category>,
        subcategories: Vec<Subcategory>,
    ) -> Vec<CategoryWithSubcategories> {
        categories
            .into_iter()
            .map(|category| {
                let children = subcategories
                    .iter()
                    .filter(|s| s.category_id == category.id)
                    .cloned()
                    .collect();
                CategoryWithSubcategories {
                    category,
                    subcategories: children,
                }
            })
            .collect()
    }
}

#[async_trait]
impl<T: CategoryRepositoryTrait + Send + Sync> CategoryServiceTrait for CategoryService<T> {
    fn get_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>> {
        self.category_repo.get_categories(kind)
    }

    fn get_categories_with_subcategories(
        &self,
        kind: Option<CategoryKind>,
    ) -> Result<Vec<CategoryWithSubcategories>> {
        let categories = self.category_repo.get_categories(kind)?;
        let subcategories = self.category_repo.get_subcategories(None)?;
        Ok(Self::organize_hierarchically(categories, subcategories))
    }

    fn get_category(&self, id: i64) -> Result<Option<Category>> {
        self.category_repo.get_category_by_id(id)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        let new_category = NewCategory {
            name: new_category.name.trim().to_string(),
            kind: new_category.kind,
        };
        debug!(
            "Creating category '{}' ({})",
            new_category.name, new_category.kind
        );
        self.category_repo.create_category(new_category).await
    }

    fn get_subcategories(&self, category_id: i64) -> Result<Vec<Subcategory>> {
        self.category_repo.get_subcategories(Some(category_id))
    }

    fn get_subcategory(&self, id: i64) -> Result<Option<Subcategory>> {
        self.category_repo.get_subcategory_by_id(id)
    }

    async fn create_subcategory(&self, new_subcategory: NewSubcategory) -> Result<Subcategory> {
        new_subcategory.validate()?;
        if self
            .category_repo
            .get_category_by_id(new_subcategory.category_id)?
            .is_none()
        {
            return Err(ReferenceError::Category(new_subcategory.category_id).into());
        }
        let new_subcategory = NewSubcategory {
            category_id: new_subcategory.category_id,
            name: new_subcategory.name.trim().to_string(),
        };
        self.category_repo.create_subcategory(new_subcategory).await
    }

    fn validate_references(&self, category_id: i64, subcategory_id: Option<i64>) -> Result<()> {
        if self.category_repo.get_category_by_id(category_id)?.is_none() {
            return Err(ReferenceError::Category(category_id).into());
        }
        if let Some(subcategory_id) = subcategory_id {
            let subcategory = self
                .category_repo
                .get_subcategory_by_id(subcategory_id)?
                .ok_or(ReferenceError::Subcategory(subcategory_id))?;
            if subcategory.category_id != category_id {
                return Err(ReferenceError::SubcategoryCategoryMismatch {
                    subcategory_id,
                    category_id,
                }
                .into());
            }
        }
        Ok(())
    }
}
