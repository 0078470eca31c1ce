//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub creation_date: Date,
    pub edit_date: Option<Date>,
    #[sea_orm(column_type = "Text")]
    pub picture: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for postboard_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            comment: model.comment,
            creation_date: model.creation_date,
            edit_date: model.edit_date,
            picture: model.picture,
            color: model.color,
        }
    }
}

/// Conversion from Domain Post to a SeaORM ActiveModel for insertion.
///
/// The id is left unset so SQLite assigns it.
impl From<postboard_core::domain::Post> for ActiveModel {
    fn from(post: postboard_core::domain::Post) -> Self {
        Self {
            comment: Set(post.comment),
            creation_date: Set(post.creation_date),
            edit_date: Set(post.edit_date),
            picture: Set(post.picture),
            color: Set(post.color),
            ..Default::default()
        }
    }
}
