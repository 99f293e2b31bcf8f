use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions, Model};
use crate::errors::{Result, TinyLearnError};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{SubmissionListQuery, UpsertSubmissionRequest},
        responses::SubmissionListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取学生在某作业下的提交
    pub async fn get_submission_by_assignment_and_student_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = self
            .find_submission_row(assignment_id, student_id)
            .await?;

        Ok(result.map(|m| m.into_submission()))
    }

    async fn find_submission_row(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Model>> {
        Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询提交失败: {e}")))
    }

    /// 幂等写入草稿
    ///
    /// 唯一索引 (assignment_id, student_id) 保证每个学生每份作业只有一行。
    /// 并发首次写入可能触发唯一冲突，此时降级为更新既有行。
    pub async fn upsert_draft_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        draft: UpsertSubmissionRequest,
    ) -> Result<Submission> {
        let attachments = serde_json::to_string(&draft.attachments)
            .map_err(|e| TinyLearnError::serialization(format!("附件序列化失败: {e}")))?;
        let now = chrono::Utc::now().timestamp();

        if let Some(existing) = self.find_submission_row(assignment_id, student_id).await? {
            return self
                .update_draft_row(existing, draft.content, attachments, now)
                .await;
        }

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            content: Set(draft.content.clone()),
            attachments: Set(Some(attachments.clone())),
            status: Set(SubmissionStatus::Draft.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(inserted) => Ok(inserted.into_submission()),
            // 并发插入撞唯一索引，改走更新路径
            Err(_) => {
                let existing = self
                    .find_submission_row(assignment_id, student_id)
                    .await?
                    .ok_or_else(|| {
                        TinyLearnError::database_operation("创建草稿失败且未找到既有提交")
                    })?;
                self.update_draft_row(existing, draft.content, attachments, now)
                    .await
            }
        }
    }

    async fn update_draft_row(
        &self,
        existing: Model,
        content: String,
        attachments: String,
        now: i64,
    ) -> Result<Submission> {
        let mut model: ActiveModel = existing.into();
        model.content = Set(content);
        model.attachments = Set(Some(attachments));
        model.updated_at = Set(now);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("更新草稿失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 提交草稿，记录提交时刻
    pub async fn submit_submission_impl(&self, id: i64) -> Result<Option<Submission>> {
        let Some(existing) = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询提交失败: {e}")))?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let mut model: ActiveModel = existing.into();
        model.status = Set(SubmissionStatus::Submitted.to_string());
        model.submitted_at = Set(Some(now));
        model.updated_at = Set(now);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("提交作业失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }

    /// 评分，记录评分人与评分时刻
    pub async fn grade_submission_impl(
        &self,
        id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        let Some(existing) = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询提交失败: {e}")))?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let mut model: ActiveModel = existing.into();
        model.status = Set(SubmissionStatus::Graded.to_string());
        model.score = Set(Some(score));
        model.feedback = Set(feedback);
        model.graded_by = Set(Some(grader_id));
        model.graded_at = Set(Some(now));
        model.updated_at = Set(now);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("评分失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }

    /// 分页列出某作业的提交
    pub async fn list_submissions_for_assignment_impl(
        &self,
        assignment_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Submissions::find().filter(Column::AssignmentId.eq(assignment_id));

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::UpdatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询提交总数失败: {e}")))?;

        let submissions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(SubmissionListResponse {
            items: submissions
                .into_iter()
                .map(|m| m.into_submission())
                .collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }
}
