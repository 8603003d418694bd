use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(pk_auto(Content::Id))
                    .col(integer(Content::CreatorId))
                    .col(string(Content::Title))
                    .col(text(Content::Description))
                    .col(boolean(Content::Visibility).default(true))
                    .col(string_null(Content::ContentFilePath))
                    .col(string_null(Content::ThumbnailFilePath))
                    .col(timestamp_with_time_zone(Content::UploadedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_creator_id")
                            .from(Content::Table, Content::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Content {
    Table,
    Id,
    CreatorId,
    Title,
    Description,
    Visibility,
    ContentFilePath,
    ThumbnailFilePath,
    UploadedAt,
}
