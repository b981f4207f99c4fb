use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TutoringSession::Table)
                    .if_not_exists()
                    .col(pk_auto(TutoringSession::Id))
                    .col(string(TutoringSession::Name))
                    .col(string(TutoringSession::TutorId))
                    .col(string(TutoringSession::TutorName))
                    .col(timestamp(TutoringSession::SessionDate))
                    .col(integer(TutoringSession::SessionHours))
                    .col(
                        timestamp(TutoringSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural key lookups filter on all three columns
        manager
            .create_index(
                Index::create()
                    .name("idx_tutoring_session_natural_key")
                    .table(TutoringSession::Table)
                    .col(TutoringSession::Name)
                    .col(TutoringSession::TutorId)
                    .col(TutoringSession::SessionDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TutoringSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TutoringSession {
    Table,
    Id,
    Name,
    TutorId,
    TutorName,
    SessionDate,
    SessionHours,
    CreatedAt,
}
