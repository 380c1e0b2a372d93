use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `works` table and its columns.
#[derive(DeriveIden)]
enum Works {
    Table,
    Id,
    DesignerId,
    Title,
    Description,
    ImageUrl,
    UploadDate,
    ViewsCount,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Works::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Works::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Works::DesignerId).uuid().not_null())
                    .col(ColumnDef::new(Works::Title).string().not_null())
                    .col(ColumnDef::new(Works::Description).text().null())
                    .col(ColumnDef::new(Works::ImageUrl).string().null())
                    .col(
                        ColumnDef::new(Works::UploadDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Works::ViewsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_works_designer_id")
                            .from(Works::Table, Works::DesignerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Works::Table).to_owned())
            .await
    }
}
