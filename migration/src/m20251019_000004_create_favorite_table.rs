use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_create_holocron_user_table::HolocronUser;

static IDX_FAVORITE_USER_ID: &str = "idx-favorite-user_id";
static IDX_FAVORITE_ENTRY: &str = "idx-favorite-user_id-kind-favorite_id";
static FK_FAVORITE_USER_ID: &str = "fk-favorite-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign key is declared inline so the table also builds on SQLite
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(string(Favorite::Kind))
                    .col(integer(Favorite::FavoriteId))
                    .col(timestamp(Favorite::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(HolocronUser::Table, HolocronUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_ENTRY)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::Kind)
                    .col(Favorite::FavoriteId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_ENTRY)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    Kind,
    FavoriteId,
    CreatedAt,
}
