use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sponsor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub sponsor_status: String,
    pub link: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::content_sponsor::Entity")]
    ContentSponsor,
}

impl Related<super::content::Entity> for Entity {
    fn to() -> RelationDef {
        super::content_sponsor::Relation::Content.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::content_sponsor::Relation::Sponsor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
