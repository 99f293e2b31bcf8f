//! 学生-家长关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_parents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub parent_id: i64,
    pub relationship: String,
    pub can_receive_messages: bool,
    pub can_view_progress: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ParentId",
        to = "super::users::Column::Id"
    )]
    Parent,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_link(self) -> crate::models::links::entities::StudentParentLink {
        use crate::models::links::entities::{ParentRelationship, StudentParentLink};
        use chrono::{DateTime, Utc};

        StudentParentLink {
            id: self.id,
            student_id: self.student_id,
            parent_id: self.parent_id,
            relationship: self
                .relationship
                .parse()
                .unwrap_or(ParentRelationship::Other),
            can_receive_messages: self.can_receive_messages,
            can_view_progress: self.can_view_progress,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
