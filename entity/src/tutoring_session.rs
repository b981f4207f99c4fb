use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tutoring_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub tutor_id: String,
    pub tutor_name: String,
    pub session_date: DateTimeUtc,
    pub session_hours: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session_student::Entity")]
    SessionStudent,
}

impl Related<super::session_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionStudent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
