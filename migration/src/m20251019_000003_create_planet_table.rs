use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLANET_ATTRIBUTES: &str = "idx-planet-attributes";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string(Planet::Name))
                    .col(big_integer(Planet::Diameter))
                    .col(big_integer(Planet::Population))
                    .col(string(Planet::Terrain))
                    .col(timestamp(Planet::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANET_ATTRIBUTES)
                    .table(Planet::Table)
                    .col(Planet::Name)
                    .col(Planet::Diameter)
                    .col(Planet::Population)
                    .col(Planet::Terrain)
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
                    .name(IDX_PLANET_ATTRIBUTES)
                    .table(Planet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Diameter,
    Population,
    Terrain,
    CreatedAt,
}
