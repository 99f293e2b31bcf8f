use super::SeaOrmStorage;
use crate::entity::achievements::{Column, Entity as Achievements};
use crate::errors::{Result, TinyLearnError};
use crate::models::achievements::responses::AchievementListResponse;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出用户的成就，按获得时间倒序
    pub async fn list_achievements_for_user_impl(
        &self,
        user_id: i64,
    ) -> Result<AchievementListResponse> {
        let rows = Achievements::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::EarnedAt)
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询成就列表失败: {e}")))?;

        let items: Vec<_> = rows.into_iter().map(|m| m.into_achievement()).collect();
        let total_points = items.iter().map(|a| a.points).sum();

        Ok(AchievementListResponse {
            items,
            total_points,
        })
    }
}
