use super::SeaOrmStorage;
use crate::entity::progress::{ActiveModel, Column, Entity as ProgressRows, Model};
use crate::errors::{Result, TinyLearnError};
use crate::models::progress::{
    entities::{Progress, ProgressStatus},
    requests::UpdateProgressRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TryIntoModel,
};

impl SeaOrmStorage {
    /// 获取进度行
    pub async fn get_progress_impl(&self, user_id: i64, lesson_id: i64) -> Result<Option<Progress>> {
        let result = self.find_progress_row(user_id, lesson_id).await?;
        Ok(result.map(|m| m.into_progress()))
    }

    async fn find_progress_row(&self, user_id: i64, lesson_id: i64) -> Result<Option<Model>> {
        ProgressRows::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::LessonId.eq(lesson_id))
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询进度失败: {e}")))
    }

    /// 开始课程
    ///
    /// 幂等：已有进度行时原样返回，不回退状态。
    /// 唯一索引 (user_id, lesson_id) 下并发首次写入冲突时降级为读取既有行。
    pub async fn start_lesson_progress_impl(
        &self,
        user_id: i64,
        lesson_id: i64,
    ) -> Result<Progress> {
        if let Some(existing) = self.find_progress_row(user_id, lesson_id).await? {
            return Ok(existing.into_progress());
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            user_id: Set(user_id),
            lesson_id: Set(lesson_id),
            status: Set(ProgressStatus::InProgress.to_string()),
            time_spent: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(inserted) => Ok(inserted.into_progress()),
            Err(_) => {
                let existing = self
                    .find_progress_row(user_id, lesson_id)
                    .await?
                    .ok_or_else(|| {
                        TinyLearnError::database_operation("创建进度失败且未找到既有进度行")
                    })?;
                Ok(existing.into_progress())
            }
        }
    }

    /// 写入进度更新
    ///
    /// time_spent 为增量，在既有值上累加；状态推进到 completed 时记录完成时刻。
    /// 状态是否允许推进由调用方校验，这里只负责落盘。
    pub async fn upsert_progress_impl(
        &self,
        user_id: i64,
        lesson_id: i64,
        update: UpdateProgressRequest,
    ) -> Result<Progress> {
        let now = chrono::Utc::now().timestamp();

        let (mut model, prev_time_spent): (ActiveModel, i64) =
            match self.find_progress_row(user_id, lesson_id).await? {
                Some(existing) => {
                    let time_spent = existing.time_spent;
                    (existing.into(), time_spent)
                }
                None => (
                    ActiveModel {
                        user_id: Set(user_id),
                        lesson_id: Set(lesson_id),
                        status: Set(ProgressStatus::NotStarted.to_string()),
                        time_spent: Set(0),
                        created_at: Set(now),
                        ..Default::default()
                    },
                    0,
                ),
            };

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
            // 重复完成会刷新完成时刻
            if status == ProgressStatus::Completed {
                model.completed_at = Set(Some(now));
            }
        }
        if let Some(score) = update.score {
            model.score = Set(Some(score));
        }
        if let Some(delta) = update.time_spent {
            model.time_spent = Set(accumulate_time_spent(prev_time_spent, delta));
        }
        if let Some(notes) = update.notes {
            model.notes = Set(Some(notes));
        }
        model.updated_at = Set(now);

        let result = model
            .save(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("写入进度失败: {e}")))?;

        let result = result
            .try_into_model()
            .map_err(|e| TinyLearnError::database_operation(format!("写入进度失败: {e}")))?;

        Ok(result.into_progress())
    }

    /// 列出用户的全部进度行
    pub async fn list_progress_for_user_impl(&self, user_id: i64) -> Result<Vec<Progress>> {
        let rows = ProgressRows::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询进度列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_progress()).collect())
    }
}

/// time_spent 是增量语义，累加到既有值上，负增量按 0 处理
fn accumulate_time_spent(prev: i64, delta: i64) -> i64 {
    prev + delta.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::lessons::ActiveModel as LessonActiveModel;
    use crate::entity::users::ActiveModel as UserActiveModel;

    #[test]
    fn test_accumulate_time_spent() {
        assert_eq!(accumulate_time_spent(0, 5), 5);
        assert_eq!(accumulate_time_spent(10, 5), 15);
        assert_eq!(accumulate_time_spent(15, 0), 15);
        assert_eq!(accumulate_time_spent(15, -3), 15);
    }

    async fn seed_student_with_lesson(storage: &SeaOrmStorage) -> (i64, i64) {
        let now = chrono::Utc::now().timestamp();
        let user = UserActiveModel {
            username: Set("student1".to_string()),
            email: Set("student1@example.com".to_string()),
            password_hash: Set("hash".to_string()),
            role: Set("student".to_string()),
            status: Set("active".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let user_id = user.insert(&storage.db).await.unwrap().id;

        let lesson = LessonActiveModel {
            created_by: Set(user_id),
            title: Set("数数入门".to_string()),
            category: Set("math".to_string()),
            difficulty: Set("beginner".to_string()),
            status: Set("active".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let lesson_id = lesson.insert(&storage.db).await.unwrap().id;

        (user_id, lesson_id)
    }

    #[tokio::test]
    async fn test_repeated_deltas_accumulate() {
        let storage = SeaOrmStorage::open_in_memory().await;
        let (user_id, lesson_id) = seed_student_with_lesson(&storage).await;

        // 三次 +5 得到 15，而不是最后一次覆盖
        for _ in 0..3 {
            let update = UpdateProgressRequest {
                time_spent: Some(5),
                ..Default::default()
            };
            storage
                .upsert_progress_impl(user_id, lesson_id, update)
                .await
                .unwrap();
        }

        let progress = storage
            .get_progress_impl(user_id, lesson_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(progress.time_spent, 15);
    }
}
