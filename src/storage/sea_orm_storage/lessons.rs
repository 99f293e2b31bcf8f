use super::SeaOrmStorage;
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::errors::{Result, TinyLearnError};
use crate::models::{
    PaginationInfo,
    lessons::{
        entities::{Lesson, LessonStatus},
        requests::{CreateLessonRequest, LessonListQuery, UpdateLessonRequest},
        responses::LessonListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_lesson_impl(
        &self,
        created_by: i64,
        req: CreateLessonRequest,
    ) -> Result<Lesson> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            created_by: Set(created_by),
            title: Set(req.title),
            description: Set(req.description),
            content: Set(req.content),
            category: Set(req.category),
            difficulty: Set(req.difficulty.to_string()),
            age_group: Set(req.age_group),
            status: Set(LessonStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_lesson())
    }

    /// 通过 ID 获取课程
    pub async fn get_lesson_by_id_impl(&self, id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    /// 分页列出课程
    pub async fn list_lessons_with_pagination_impl(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Lessons::find();

        // 归档课程默认不可见
        if !query.include_archived {
            select = select.filter(Column::Status.eq(LessonStatus::Active.to_string()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        if let Some(ref category) = query.category {
            select = select.filter(Column::Category.eq(category));
        }

        if let Some(ref difficulty) = query.difficulty {
            select = select.filter(Column::Difficulty.eq(difficulty.to_string()));
        }

        if let Some(ref age_group) = query.age_group {
            select = select.filter(Column::AgeGroup.eq(age_group));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询课程总数失败: {e}")))?;

        let lessons = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(LessonListResponse {
            items: lessons.into_iter().map(|m| m.into_lesson()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    /// 更新课程
    pub async fn update_lesson_impl(
        &self,
        id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        let Some(existing) = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(content) = update.content {
            model.content = Set(Some(content));
        }
        if let Some(category) = update.category {
            model.category = Set(category);
        }
        if let Some(difficulty) = update.difficulty {
            model.difficulty = Set(difficulty.to_string());
        }
        if let Some(age_group) = update.age_group {
            model.age_group = Set(Some(age_group));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(result.into_lesson()))
    }

    /// 归档课程
    ///
    /// 不做物理删除，历史进度行保持可追溯。
    pub async fn archive_lesson_impl(&self, id: i64) -> Result<bool> {
        let result = Lessons::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(LessonStatus::Archived.to_string()),
            )
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(LessonStatus::Active.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("归档课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计活跃课程数
    pub async fn count_active_lessons_impl(&self) -> Result<i64> {
        let count = Lessons::find()
            .filter(Column::Status.eq(LessonStatus::Active.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("统计课程失败: {e}")))?;

        Ok(count as i64)
    }
}
