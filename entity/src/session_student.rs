use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session_student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub session_id: i32,
    pub student_name: String,
    pub student_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tutoring_session::Entity",
        from = "Column::SessionId",
        to = "super::tutoring_session::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TutoringSession,
}

impl Related<super::tutoring_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TutoringSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
