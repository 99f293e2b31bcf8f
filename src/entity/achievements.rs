//! 成就实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub lesson_id: Option<i64>,
    pub assignment_id: Option<i64>,
    pub achievement_type: String,
    pub title: String,
    pub points: i64,
    pub earned_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_achievement(self) -> crate::models::achievements::entities::Achievement {
        use crate::models::achievements::entities::Achievement;
        use chrono::{DateTime, Utc};

        Achievement {
            id: self.id,
            user_id: self.user_id,
            lesson_id: self.lesson_id,
            assignment_id: self.assignment_id,
            achievement_type: self.achievement_type,
            title: self.title,
            points: self.points,
            earned_at: DateTime::<Utc>::from_timestamp(self.earned_at, 0).unwrap_or_default(),
        }
    }
}
