use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub creator_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub visibility: bool,
    pub content_file_path: Option<String>,
    pub thumbnail_file_path: Option<String>,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::content_genre::Entity")]
    ContentGenre,
    #[sea_orm(has_many = "super::content_category::Entity")]
    ContentCategory,
    #[sea_orm(has_many = "super::content_sponsor::Entity")]
    ContentSponsor,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::content_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::content_genre::Relation::Content.def().rev())
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::content_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::content_category::Relation::Content.def().rev())
    }
}

impl Related<super::sponsor::Entity> for Entity {
    fn to() -> RelationDef {
        super::content_sponsor::Relation::Sponsor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::content_sponsor::Relation::Content.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
