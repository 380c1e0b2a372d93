use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `work_views` table.
///
/// The composite primary key (work_id, user_id) is what makes view
/// registration idempotent: one counted view per user per work.
#[derive(DeriveIden)]
enum WorkViews {
    Table,
    WorkId,
    UserId,
    ViewedAt,
}

#[derive(DeriveIden)]
enum Works {
    Table,
    Id,
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
                    .table(WorkViews::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WorkViews::WorkId).uuid().not_null())
                    .col(ColumnDef::new(WorkViews::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(WorkViews::ViewedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create().col(WorkViews::WorkId).col(WorkViews::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_views_work_id")
                            .from(WorkViews::Table, WorkViews::WorkId)
                            .to(Works::Table, Works::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_views_user_id")
                            .from(WorkViews::Table, WorkViews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkViews::Table).to_owned())
            .await
    }
}
