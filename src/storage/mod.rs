use std::sync::Arc;

use crate::models::{
    achievements::responses::AchievementListResponse,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentListResponse, StudentAssignmentListResponse},
    },
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, LessonListQuery, UpdateLessonRequest},
        responses::LessonListResponse,
    },
    links::{
        entities::StudentParentLink,
        requests::CreateLinkRequest,
        responses::LinkListResponse,
    },
    messages::{
        entities::Message,
        requests::{ConversationQuery, SendMessageRequest},
        responses::{ConversationListResponse, MessageListResponse},
    },
    progress::{
        entities::Progress,
        requests::UpdateProgressRequest,
    },
    submissions::{
        entities::Submission,
        requests::{SubmissionListQuery, UpsertSubmissionRequest},
        responses::SubmissionListResponse,
    },
    users::{
        entities::{User, UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 更新用户状态（审核/停用）
    async fn update_user_status(&self, id: i64, status: UserStatus) -> Result<Option<User>>;
    // 统计指定角色的用户数
    async fn count_users_by_role(&self, role: UserRole) -> Result<i64>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_lesson(&self, created_by: i64, lesson: CreateLessonRequest) -> Result<Lesson>;
    // 通过ID获取课程
    async fn get_lesson_by_id(&self, id: i64) -> Result<Option<Lesson>>;
    // 列出课程
    async fn list_lessons_with_pagination(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse>;
    // 更新课程
    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>>;
    // 归档课程（软删除）
    async fn archive_lesson(&self, id: i64) -> Result<bool>;
    // 统计活跃课程数
    async fn count_active_lessons(&self) -> Result<i64>;

    /// 作业管理方法
    // 创建作业并写入指派名单
    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出教师布置的作业
    async fn list_assignments_by_teacher(
        &self,
        teacher_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 列出全部作业（管理员视角）
    async fn list_all_assignments(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 列出学生被指派的作业，附带提交状态与逾期标注
    async fn list_assignments_for_student(
        &self,
        student_id: i64,
        query: AssignmentListQuery,
    ) -> Result<StudentAssignmentListResponse>;
    // 更新作业（限布置者本人）
    async fn update_assignment(
        &self,
        id: i64,
        teacher_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 归档作业（限布置者本人）
    async fn archive_assignment(&self, id: i64, teacher_id: i64) -> Result<bool>;
    // 获取作业的指派学生 ID 列表
    async fn list_assignment_assignees(&self, assignment_id: i64) -> Result<Vec<i64>>;
    // 判断学生是否在指派名单内
    async fn is_assigned(&self, assignment_id: i64, student_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 获取学生在某作业下的提交
    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 幂等写入草稿，键为 (assignment_id, student_id)
    async fn upsert_draft(
        &self,
        assignment_id: i64,
        student_id: i64,
        draft: UpsertSubmissionRequest,
    ) -> Result<Submission>;
    // 提交草稿（draft -> submitted）
    async fn submit_submission(&self, id: i64) -> Result<Option<Submission>>;
    // 评分（submitted -> graded）
    async fn grade_submission(
        &self,
        id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;
    // 列出某作业的全部提交
    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;

    /// 学习进度方法
    // 获取进度行
    async fn get_progress(&self, user_id: i64, lesson_id: i64) -> Result<Option<Progress>>;
    // 开始课程（幂等：已有进度则原样返回）
    async fn start_lesson_progress(&self, user_id: i64, lesson_id: i64) -> Result<Progress>;
    // 写入进度更新；time_spent 为增量，在既有值上累加
    async fn upsert_progress(
        &self,
        user_id: i64,
        lesson_id: i64,
        update: UpdateProgressRequest,
    ) -> Result<Progress>;
    // 列出用户的全部进度行
    async fn list_progress_for_user(&self, user_id: i64) -> Result<Vec<Progress>>;

    /// 消息方法
    // 发送消息
    async fn create_message(&self, sender_id: i64, message: SendMessageRequest) -> Result<Message>;
    // 通过ID获取消息
    async fn get_message_by_id(&self, id: i64) -> Result<Option<Message>>;
    // 列出与某对端的会话消息（倒序翻页）
    async fn list_conversation(
        &self,
        user_id: i64,
        partner_id: i64,
        query: ConversationQuery,
    ) -> Result<MessageListResponse>;
    // 列出当前用户的全部会话摘要
    async fn list_conversations(&self, user_id: i64) -> Result<ConversationListResponse>;
    // 标记单条消息已读（限接收者）
    async fn mark_message_read(&self, id: i64, receiver_id: i64) -> Result<Option<Message>>;
    // 标记整个会话已读，返回受影响行数
    async fn mark_conversation_read(&self, user_id: i64, partner_id: i64) -> Result<u64>;
    // 当前用户未读消息总数
    async fn count_unread_messages(&self, user_id: i64) -> Result<i64>;

    /// 学生-家长关联方法
    // 创建关联
    async fn create_link(&self, link: CreateLinkRequest) -> Result<StudentParentLink>;
    // 通过ID获取关联
    async fn get_link_by_id(&self, id: i64) -> Result<Option<StudentParentLink>>;
    // 获取某学生与某家长之间的关联
    async fn get_link(&self, student_id: i64, parent_id: i64)
    -> Result<Option<StudentParentLink>>;
    // 列出家长名下的关联（附学生信息）
    async fn list_links_for_parent(&self, parent_id: i64) -> Result<LinkListResponse>;
    // 删除关联
    async fn delete_link(&self, id: i64) -> Result<bool>;

    /// 成就方法
    // 列出用户的成就
    async fn list_achievements_for_user(&self, user_id: i64) -> Result<AchievementListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
