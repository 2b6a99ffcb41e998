//! Categories module - income/expense categories, subcategories and reference checks.

mod categories_model;
mod categories_service;
mod categories_traits;


pub use categories_model::{
    Category, CategoryKind, CategoryWithSubcategories, NewCategory, NewSubcategory, Subcategory,
};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
