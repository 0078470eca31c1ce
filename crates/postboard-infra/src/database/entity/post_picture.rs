//! Post picture entity for SeaORM.
//!
//! Mirrors the remote listing; the table exists but nothing writes to it.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_pictures")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub author: String,
    pub width: i32,
    pub height: i32,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    #[sea_orm(column_type = "Text")]
    pub download_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain PostPicture.
impl From<Model> for postboard_core::domain::PostPicture {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: model.author,
            width: model.width.max(0) as u32,
            height: model.height.max(0) as u32,
            url: model.url,
            download_url: model.download_url,
        }
    }
}
