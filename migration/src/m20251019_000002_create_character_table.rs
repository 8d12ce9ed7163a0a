use sea_orm_migration::{prelude::*, schema::*};

static IDX_CHARACTER_ATTRIBUTES: &str = "idx-character-attributes";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(string(Character::Gender))
                    .col(string(Character::HairColor))
                    .col(string(Character::EyeColor))
                    .col(timestamp(Character::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_ATTRIBUTES)
                    .table(Character::Table)
                    .col(Character::Name)
                    .col(Character::Gender)
                    .col(Character::HairColor)
                    .col(Character::EyeColor)
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
                    .name(IDX_CHARACTER_ATTRIBUTES)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Gender,
    HairColor,
    EyeColor,
    CreatedAt,
}
