use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `designer_profiles` table and its columns.
///
/// The table is keyed by the designer's own user id: one profile per
/// designer.
#[derive(DeriveIden)]
enum DesignerProfiles {
    Table,
    DesignerId,
    Specialization,
    Bio,
    Experience,
    Rating,
    ViewsCount,
    WorkAmount,
    AvatarUrl,
    HeaderUrl,
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
                    .table(DesignerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DesignerProfiles::DesignerId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DesignerProfiles::Specialization).string().null())
                    .col(ColumnDef::new(DesignerProfiles::Bio).text().null())
                    .col(
                        ColumnDef::new(DesignerProfiles::Experience)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DesignerProfiles::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(DesignerProfiles::ViewsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DesignerProfiles::WorkAmount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(DesignerProfiles::AvatarUrl).string().null())
                    .col(ColumnDef::new(DesignerProfiles::HeaderUrl).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_designer_profiles_designer_id")
                            .from(DesignerProfiles::Table, DesignerProfiles::DesignerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DesignerProfiles::Table).to_owned())
            .await
    }
}
