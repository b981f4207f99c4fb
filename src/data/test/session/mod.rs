use crate::{
    data::session::SessionRepository,
    model::session::{SessionKey, SetSessionParams, Student, Upsert},
};
use chrono::{TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_key;
mod get_all_by_name;
mod get_by_key;
mod upsert;

/// Parameters for the "Math 101" session used across these tests.
fn math_101() -> SetSessionParams {
    SetSessionParams {
        name: "Math 101".to_string(),
        date: Utc.with_ymd_and_hms(2025, 3, 30, 0, 0, 0).unwrap(),
        session_hours: 2,
        tutor_name: "John Doe".to_string(),
        tutor_id: "12345".to_string(),
        students: Vec::new(),
    }
}
