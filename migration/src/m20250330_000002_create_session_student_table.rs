use sea_orm_migration::{prelude::*, schema::*};

use super::m20250330_000001_create_tutoring_session_table::TutoringSession;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionStudent::Table)
                    .if_not_exists()
                    .col(pk_auto(SessionStudent::Id))
                    .col(integer(SessionStudent::SessionId))
                    .col(string(SessionStudent::StudentName))
                    .col(string(SessionStudent::StudentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_student_session_id")
                            .from(SessionStudent::Table, SessionStudent::SessionId)
                            .to(TutoringSession::Table, TutoringSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionStudent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SessionStudent {
    Table,
    Id,
    SessionId,
    StudentName,
    StudentId,
}
