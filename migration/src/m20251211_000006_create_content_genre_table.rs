use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000002_create_genre_table::Genre;
use super::m20251211_000005_create_content_table::Content;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentGenre::Table)
                    .if_not_exists()
                    .col(integer(ContentGenre::ContentId))
                    .col(integer(ContentGenre::GenreId))
                    .primary_key(
                        Index::create()
                            .col(ContentGenre::ContentId)
                            .col(ContentGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_genre_content_id")
                            .from(ContentGenre::Table, ContentGenre::ContentId)
                            .to(Content::Table, Content::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_genre_genre_id")
                            .from(ContentGenre::Table, ContentGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContentGenre {
    Table,
    ContentId,
    GenreId,
}
