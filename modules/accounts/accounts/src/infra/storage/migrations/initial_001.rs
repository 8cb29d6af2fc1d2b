use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Only `id` is unique; the other columns legitimately repeat across accounts.
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::Balance).text().not_null())
                    .col(ColumnDef::new(Accounts::Credit).big_integer().not_null())
                    .col(ColumnDef::new(Accounts::Picture).text().not_null())
                    .col(ColumnDef::new(Accounts::NameFirst).text().not_null())
                    .col(ColumnDef::new(Accounts::NameLast).text().not_null())
                    .col(ColumnDef::new(Accounts::Employer).text().not_null())
                    .col(ColumnDef::new(Accounts::Email).text().not_null())
                    .col(ColumnDef::new(Accounts::Phone).text().not_null())
                    .col(ColumnDef::new(Accounts::Address).text().not_null())
                    .col(ColumnDef::new(Accounts::Comments).text().not_null())
                    .col(ColumnDef::new(Accounts::Created).text().not_null())
                    .col(ColumnDef::new(Accounts::Tags).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Balance,
    Credit,
    Picture,
    NameFirst,
    NameLast,
    Employer,
    Email,
    Phone,
    Address,
    Comments,
    Created,
    Tags,
}
