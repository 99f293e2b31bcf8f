use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignment_assignees::{
    ActiveModel as AssigneeActiveModel, Column as AssigneeColumn, Entity as AssignmentAssignees,
};
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{Result, TinyLearnError};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{
            AssignmentListResponse, StudentAssignmentItem, StudentAssignmentListResponse,
        },
    },
    submissions::entities::SubmissionStatus,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建作业并在同一事务内写入指派名单
    pub async fn create_assignment_impl(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            lesson_id: Set(req.lesson_id),
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date.timestamp()),
            max_points: Set(req
                .max_points
                .unwrap_or(crate::models::assignments::entities::DEFAULT_MAX_POINTS)),
            status: Set(AssignmentStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("创建作业失败: {e}")))?;

        for student_id in req.assigned_to {
            let assignee = AssigneeActiveModel {
                assignment_id: Set(inserted.id),
                student_id: Set(student_id),
                created_at: Set(now),
                ..Default::default()
            };
            assignee.insert(&txn).await.map_err(|e| {
                TinyLearnError::database_operation(format!("写入作业指派失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(inserted.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出教师布置的作业
    pub async fn list_assignments_by_teacher_impl(
        &self,
        teacher_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find().filter(Column::TeacherId.eq(teacher_id));

        select = Self::apply_assignment_filters(select, &query);
        select = select.order_by_desc(Column::DueDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询作业总数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    /// 分页列出全部作业，管理员视角
    pub async fn list_all_assignments_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();
        select = Self::apply_assignment_filters(select, &query);
        select = select.order_by_desc(Column::DueDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询作业总数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    /// 分页列出学生被指派的作业，附带提交状态与逾期标注
    pub async fn list_assignments_for_student_impl(
        &self,
        student_id: i64,
        query: AssignmentListQuery,
    ) -> Result<StudentAssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let assigned_ids: Vec<i64> = AssignmentAssignees::find()
            .filter(AssigneeColumn::StudentId.eq(student_id))
            .select_only()
            .column(AssigneeColumn::AssignmentId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询指派名单失败: {e}")))?;

        // 学生视角只有 active 作业，归档作业即使显式按状态查询也不可见
        let mut select = Assignments::find()
            .filter(Column::Id.is_in(assigned_ids))
            .filter(Column::Status.eq(AssignmentStatus::Active.to_string()));
        select = Self::apply_assignment_filters(select, &query);
        select = select.order_by_desc(Column::DueDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询作业总数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询作业列表失败: {e}")))?;

        // 查询本页作业对应的提交状态
        let page_ids: Vec<i64> = assignments.iter().map(|m| m.id).collect();
        let submissions = Submissions::find()
            .filter(SubmissionColumn::StudentId.eq(student_id))
            .filter(SubmissionColumn::AssignmentId.is_in(page_ids))
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询提交状态失败: {e}")))?;

        let status_by_assignment: HashMap<i64, SubmissionStatus> = submissions
            .into_iter()
            .map(|m| {
                let status = m
                    .status
                    .parse()
                    .unwrap_or(SubmissionStatus::Draft);
                (m.assignment_id, status)
            })
            .collect();

        let now = chrono::Utc::now();
        let items = assignments
            .into_iter()
            .map(|m| {
                let assignment = m.into_assignment();
                let submission_status = status_by_assignment.get(&assignment.id).copied();
                StudentAssignmentItem {
                    is_overdue: assignment.is_overdue_for(now, submission_status),
                    days_until_due: assignment.days_until_due(now),
                    submission_status,
                    assignment,
                }
            })
            .collect();

        Ok(StudentAssignmentListResponse {
            items,
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    fn apply_assignment_filters(
        mut select: sea_orm::Select<Assignments>,
        query: &AssignmentListQuery,
    ) -> sea_orm::Select<Assignments> {
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
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

        select
    }

    /// 更新作业，限布置者本人
    ///
    /// 找不到或不属于该教师时一律返回 None，调用方不区分两种情况。
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        teacher_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let Some(existing) = Assignments::find_by_id(id)
            .filter(Column::TeacherId.eq(teacher_id))
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询作业失败: {e}")))?
        else {
            return Ok(None);
        };

        let assignment_id = existing.id;
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("开启事务失败: {e}")))?;

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date.timestamp());
        }
        if let Some(max_points) = update.max_points {
            model.max_points = Set(max_points);
        }
        model.updated_at = Set(now);

        let result = model
            .update(&txn)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("更新作业失败: {e}")))?;

        // 指派名单整体替换
        if let Some(assigned_to) = update.assigned_to {
            AssignmentAssignees::delete_many()
                .filter(AssigneeColumn::AssignmentId.eq(assignment_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    TinyLearnError::database_operation(format!("清空作业指派失败: {e}"))
                })?;

            for student_id in assigned_to {
                let assignee = AssigneeActiveModel {
                    assignment_id: Set(assignment_id),
                    student_id: Set(student_id),
                    created_at: Set(now),
                    ..Default::default()
                };
                assignee.insert(&txn).await.map_err(|e| {
                    TinyLearnError::database_operation(format!("写入作业指派失败: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(result.into_assignment()))
    }

    /// 归档作业，限布置者本人
    pub async fn archive_assignment_impl(&self, id: i64, teacher_id: i64) -> Result<bool> {
        let result = Assignments::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(AssignmentStatus::Archived.to_string()),
            )
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::Status.eq(AssignmentStatus::Active.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("归档作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取作业的指派学生 ID 列表
    pub async fn list_assignment_assignees_impl(&self, assignment_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = AssignmentAssignees::find()
            .filter(AssigneeColumn::AssignmentId.eq(assignment_id))
            .select_only()
            .column(AssigneeColumn::StudentId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询指派名单失败: {e}")))?;

        Ok(ids)
    }

    /// 判断学生是否在指派名单内
    pub async fn is_assigned_impl(&self, assignment_id: i64, student_id: i64) -> Result<bool> {
        let count = AssignmentAssignees::find()
            .filter(AssigneeColumn::AssignmentId.eq(assignment_id))
            .filter(AssigneeColumn::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询指派失败: {e}")))?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::users::ActiveModel as UserActiveModel;
    use chrono::Duration;

    async fn seed_user(storage: &SeaOrmStorage, username: &str, role: &str) -> i64 {
        let now = chrono::Utc::now().timestamp();
        let user = UserActiveModel {
            username: Set(username.to_string()),
            email: Set(format!("{username}@example.com")),
            password_hash: Set("hash".to_string()),
            role: Set(role.to_string()),
            status: Set("active".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        user.insert(&storage.db).await.unwrap().id
    }

    fn assignment_request(title: &str, student_id: i64) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            title: title.to_string(),
            description: None,
            lesson_id: None,
            assigned_to: vec![student_id],
            due_date: chrono::Utc::now() + Duration::days(7),
            max_points: None,
        }
    }

    #[tokio::test]
    async fn test_student_listing_hides_archived_assignments() {
        let storage = SeaOrmStorage::open_in_memory().await;
        let teacher_id = seed_user(&storage, "teacher1", "teacher").await;
        let student_id = seed_user(&storage, "student1", "student").await;

        let kept = storage
            .create_assignment_impl(teacher_id, assignment_request("每周练习", student_id))
            .await
            .unwrap();
        let old = storage
            .create_assignment_impl(teacher_id, assignment_request("旧测验", student_id))
            .await
            .unwrap();
        assert!(
            storage
                .archive_assignment_impl(old.id, teacher_id)
                .await
                .unwrap()
        );

        // 默认列表只剩 active 作业
        let listing = storage
            .list_assignments_for_student_impl(student_id, AssignmentListQuery::default())
            .await
            .unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].assignment.id, kept.id);

        // 显式按 archived 查询也查不到
        let explicit = storage
            .list_assignments_for_student_impl(
                student_id,
                AssignmentListQuery {
                    status: Some(AssignmentStatus::Archived),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(explicit.items.is_empty());

        // 教师自己的列表仍能看到归档作业
        let teacher_listing = storage
            .list_assignments_by_teacher_impl(teacher_id, AssignmentListQuery::default())
            .await
            .unwrap();
        assert_eq!(teacher_listing.items.len(), 2);
    }
}
