use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000003_create_category_table::Category;
use super::m20251211_000005_create_content_table::Content;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentCategory::Table)
                    .if_not_exists()
                    .col(integer(ContentCategory::ContentId))
                    .col(integer(ContentCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(ContentCategory::ContentId)
                            .col(ContentCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_category_content_id")
                            .from(ContentCategory::Table, ContentCategory::ContentId)
                            .to(Content::Table, Content::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_category_category_id")
                            .from(ContentCategory::Table, ContentCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContentCategory {
    Table,
    ContentId,
    CategoryId,
}
