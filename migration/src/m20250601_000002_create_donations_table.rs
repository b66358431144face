use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Donations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Nullable: a donation with no cause goes to the general fund
                    .col(ColumnDef::new(Donations::CauseId).integer())
                    .col(ColumnDef::new(Donations::DonorName).string().not_null())
                    .col(ColumnDef::new(Donations::DonorEmail).string().not_null())
                    .col(ColumnDef::new(Donations::Amount).double().not_null())
                    .col(
                        ColumnDef::new(Donations::DonationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_cause_id")
                            .from(Donations::Table, Donations::CauseId)
                            .to(Causes::Table, Causes::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Donations {
    Table,
    Id,
    CauseId,
    DonorName,
    DonorEmail,
    Amount,
    DonationDate,
}

#[derive(DeriveIden)]
enum Causes {
    Table,
    Id,
}
