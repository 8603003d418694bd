use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::content_category::Entity")]
    ContentCategory,
}

impl Related<super::content::Entity> for Entity {
    fn to() -> RelationDef {
        super::content_category::Relation::Content.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::content_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
