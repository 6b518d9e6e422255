use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sheet_music")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub composer: String,
    pub difficulty: String,
    pub display_order: i32,
    pub genre: String,
    pub music_key: String,
    pub time_signature: String,
    pub description: String,
    /// Simplified note sequence shown next to the piece
    pub notes: String,
    pub attribution: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
