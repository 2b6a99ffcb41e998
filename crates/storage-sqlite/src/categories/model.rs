//! Database models for categories.

use diesel::prelude::*;

use budgetbuddy_core::categories::{Category, NewCategory, NewSubcategory, Subcategory};
use budgetbuddy_core::Error;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: i64,
    pub name: String,
    pub kind: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategoryDB {
    pub name: String,
    pub kind: String,
}

#[derive(Queryable, Identifiable, Selectable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(CategoryDB, foreign_key = category_id))]
#[diesel(table_name = crate::schema::subcategories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubcategoryDB {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::subcategories)]
pub struct NewSubcategoryDB {
    pub category_id: i64,
    pub name: String,
}

impl TryFrom<CategoryDB> for Category {
    type Error = Error;

    fn try_from(db: CategoryDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            name: db.name,
            kind: db.kind.parse()?,
        })
    }
}

impl From<SubcategoryDB> for Subcategory {
    fn from(db: SubcategoryDB) -> Self {
        Self {
            id: db.id,
            category_id: db.category_id,
            name: db.name,
        }
    }
}

impl From<NewCategory> for NewCategoryDB {
    fn from(domain: NewCategory) -> Self {
        Self {
            name: domain.name,
            kind: domain.kind.as_str().to_string(),
        }
    }
}

impl From<NewSubcategory> for NewSubcategoryDB {
    fn from(domain: NewSubcategory) -> Self {
        Self {
            category_id: domain.category_id,
            name: domain.name,
        }
    }
}
