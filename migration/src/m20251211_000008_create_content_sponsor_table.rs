use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000004_create_sponsor_table::Sponsor;
use super::m20251211_000005_create_content_table::Content;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentSponsor::Table)
                    .if_not_exists()
                    .col(integer(ContentSponsor::ContentId))
                    .col(integer(ContentSponsor::SponsorId))
                    .primary_key(
                        Index::create()
                            .col(ContentSponsor::ContentId)
                            .col(ContentSponsor::SponsorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_sponsor_content_id")
                            .from(ContentSponsor::Table, ContentSponsor::ContentId)
                            .to(Content::Table, Content::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_sponsor_sponsor_id")
                            .from(ContentSponsor::Table, ContentSponsor::SponsorId)
                            .to(Sponsor::Table, Sponsor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentSponsor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContentSponsor {
    Table,
    ContentId,
    SponsorId,
}
