use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HolocronUser::Table)
                    .if_not_exists()
                    .col(pk_auto(HolocronUser::Id))
                    .col(string_uniq(HolocronUser::Email))
                    .col(string(HolocronUser::PasswordHash))
                    .col(timestamp(HolocronUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HolocronUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HolocronUser {
    Table,
    Id,
    Email,
    PasswordHash,
    CreatedAt,
}
