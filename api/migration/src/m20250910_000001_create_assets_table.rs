use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assets::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Assets::Name).string().not_null())
                    .col(ColumnDef::new(Assets::Type).string().not_null())
                    .col(ColumnDef::new(Assets::Status).string().not_null().default("Active"))
                    .col(ColumnDef::new(Assets::AssetCode).string().not_null()) // no uniqueness: duplicate codes are allowed
                    .col(ColumnDef::new(Assets::Serial).string())
                    .col(ColumnDef::new(Assets::Department).string())
                    .col(ColumnDef::new(Assets::AssignedTo).string())
                    .col(ColumnDef::new(Assets::Location).string())
                    .col(ColumnDef::new(Assets::IpAddress).string())
                    .col(ColumnDef::new(Assets::Network).string())
                    .col(ColumnDef::new(Assets::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Assets::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // Create index on type for filter and stats queries
        manager
            .create_index(
                Index::create()
                    .name("idx_assets_type")
                    .table(Assets::Table)
                    .col(Assets::Type)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create index on status for filter and stats queries
        manager
            .create_index(
                Index::create()
                    .name("idx_assets_status")
                    .table(Assets::Table)
                    .col(Assets::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create index on created_at, the listing sort key
        manager
            .create_index(
                Index::create()
                    .name("idx_assets_created_at")
                    .table(Assets::Table)
                    .col(Assets::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    Name,
    Type,
    Status,
    AssetCode,
    Serial,
    Department,
    AssignedTo,
    Location,
    IpAddress,
    Network,
    CreatedAt,
    UpdatedAt,
}
