use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Causes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Causes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Causes::Title).string().not_null())
                    .col(ColumnDef::new(Causes::Description).text().not_null())
                    .col(ColumnDef::new(Causes::Image).string()) // optional image URL
                    .col(ColumnDef::new(Causes::GoalAmount).double().not_null())
                    .col(
                        ColumnDef::new(Causes::RaisedAmount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Causes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Causes {
    Table,
    Id,
    Title,
    Description,
    Image,
    GoalAmount,
    RaisedAmount,
}
