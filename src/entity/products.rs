use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub handle: String,
    pub weight: f64,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::storage_items::Entity")]
    StorageItems,
}

impl Related<super::storage_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StorageItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
