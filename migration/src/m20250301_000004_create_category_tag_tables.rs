use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum WorkCategories {
    Table,
    WorkId,
    CategoryId,
}

#[derive(DeriveIden)]
enum WorkTags {
    Table,
    WorkId,
    TagId,
}

#[derive(DeriveIden)]
enum Works {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Categories::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Categories::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Tags::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Junction: works <-> categories
        manager
            .create_table(
                Table::create()
                    .table(WorkCategories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WorkCategories::WorkId).uuid().not_null())
                    .col(ColumnDef::new(WorkCategories::CategoryId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(WorkCategories::WorkId)
                            .col(WorkCategories::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_categories_work_id")
                            .from(WorkCategories::Table, WorkCategories::WorkId)
                            .to(Works::Table, Works::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_categories_category_id")
                            .from(WorkCategories::Table, WorkCategories::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Junction: works <-> tags
        manager
            .create_table(
                Table::create()
                    .table(WorkTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WorkTags::WorkId).uuid().not_null())
                    .col(ColumnDef::new(WorkTags::TagId).uuid().not_null())
                    .primary_key(
                        Index::create().col(WorkTags::WorkId).col(WorkTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_tags_work_id")
                            .from(WorkTags::Table, WorkTags::WorkId)
                            .to(Works::Table, Works::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_tags_tag_id")
                            .from(WorkTags::Table, WorkTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}
