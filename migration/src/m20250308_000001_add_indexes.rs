use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Works {
    Table,
    DesignerId,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    WorkId,
    AuthorId,
}

#[derive(DeriveIden)]
enum WorkViews {
    Table,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on works.designer_id for fetching a designer's works and
        // for the rating recomputation join
        manager
            .create_index(
                Index::create()
                    .name("idx_works_designer_id")
                    .table(Works::Table)
                    .col(Works::DesignerId)
                    .to_owned(),
            )
            .await?;

        // Index on comments.work_id for fetching comments by work
        manager
            .create_index(
                Index::create()
                    .name("idx_comments_work_id")
                    .table(Comments::Table)
                    .col(Comments::WorkId)
                    .to_owned(),
            )
            .await?;

        // Index on comments.author_id for author-side lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_comments_author_id")
                    .table(Comments::Table)
                    .col(Comments::AuthorId)
                    .to_owned(),
            )
            .await?;

        // Index on work_views.user_id (the (work_id, user_id) pair is
        // already the primary key)
        manager
            .create_index(
                Index::create()
                    .name("idx_work_views_user_id")
                    .table(WorkViews::Table)
                    .col(WorkViews::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_works_designer_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comments_work_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comments_author_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_work_views_user_id").to_owned())
            .await?;

        Ok(())
    }
}
