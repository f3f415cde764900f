use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create items table. Records are loaded through the seed CLI command;
        // the API only ever reads from this table.
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Items::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Image)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Category)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Items::Weight)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Items::ReqStr)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::ReqDex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::ReqInt)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::ReqFai)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::ReqArc)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::Attack)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Defence)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::ScalesWith)
                            .text()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Category is the grouping key for every catalog view
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_category")
                    .table(Items::Table)
                    .col(Items::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Image,
    Description,
    Category,
    Weight,
    ReqStr,
    ReqDex,
    ReqInt,
    ReqFai,
    ReqArc,
    Attack,
    Defence,
    ScalesWith,
}
