//! SQLite storage implementation for categories and subcategories.

mod model;
mod repository;

pub use model::{CategoryDB, NewCategoryDB, NewSubcategoryDB, SubcategoryDB};
pub use repository::CategoryRepository;
