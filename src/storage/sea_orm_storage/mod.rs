//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod achievements;
mod assignments;
mod lessons;
mod links;
mod messages;
mod progress;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TinyLearnError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 测试用内存数据库，建好全部表
    ///
    /// 内存库随连接存在，连接池必须固定为单连接。
    #[cfg(test)]
    pub(crate) async fn open_in_memory() -> Self {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);

        let db = Database::connect(opt)
            .await
            .expect("connect in-memory sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        Self { db }
    }

    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TinyLearnError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TinyLearnError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TinyLearnError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TinyLearnError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
        entities::StudentParentLink, requests::CreateLinkRequest, responses::LinkListResponse,
    },
    messages::{
        entities::Message,
        requests::{ConversationQuery, SendMessageRequest},
        responses::{ConversationListResponse, MessageListResponse},
    },
    progress::{entities::Progress, requests::UpdateProgressRequest},
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_user_status(&self, id: i64, status: UserStatus) -> Result<Option<User>> {
        self.update_user_status_impl(id, status).await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<i64> {
        self.count_users_by_role_impl(role).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 课程模块
    async fn create_lesson(&self, created_by: i64, lesson: CreateLessonRequest) -> Result<Lesson> {
        self.create_lesson_impl(created_by, lesson).await
    }

    async fn get_lesson_by_id(&self, id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(id).await
    }

    async fn list_lessons_with_pagination(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse> {
        self.list_lessons_with_pagination_impl(query).await
    }

    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>> {
        self.update_lesson_impl(id, update).await
    }

    async fn archive_lesson(&self, id: i64) -> Result<bool> {
        self.archive_lesson_impl(id).await
    }

    async fn count_active_lessons(&self) -> Result<i64> {
        self.count_active_lessons_impl().await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(teacher_id, assignment).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_by_teacher(
        &self,
        teacher_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_by_teacher_impl(teacher_id, query)
            .await
    }

    async fn list_all_assignments(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_all_assignments_impl(query).await
    }

    async fn list_assignments_for_student(
        &self,
        student_id: i64,
        query: AssignmentListQuery,
    ) -> Result<StudentAssignmentListResponse> {
        self.list_assignments_for_student_impl(student_id, query)
            .await
    }

    async fn update_assignment(
        &self,
        id: i64,
        teacher_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, teacher_id, update).await
    }

    async fn archive_assignment(&self, id: i64, teacher_id: i64) -> Result<bool> {
        self.archive_assignment_impl(id, teacher_id).await
    }

    async fn list_assignment_assignees(&self, assignment_id: i64) -> Result<Vec<i64>> {
        self.list_assignment_assignees_impl(assignment_id).await
    }

    async fn is_assigned(&self, assignment_id: i64, student_id: i64) -> Result<bool> {
        self.is_assigned_impl(assignment_id, student_id).await
    }

    // 提交模块
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_assignment_and_student_impl(assignment_id, student_id)
            .await
    }

    async fn upsert_draft(
        &self,
        assignment_id: i64,
        student_id: i64,
        draft: UpsertSubmissionRequest,
    ) -> Result<Submission> {
        self.upsert_draft_impl(assignment_id, student_id, draft)
            .await
    }

    async fn submit_submission(&self, id: i64) -> Result<Option<Submission>> {
        self.submit_submission_impl(id).await
    }

    async fn grade_submission(
        &self,
        id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(id, grader_id, score, feedback)
            .await
    }

    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_for_assignment_impl(assignment_id, query)
            .await
    }

    // 进度模块
    async fn get_progress(&self, user_id: i64, lesson_id: i64) -> Result<Option<Progress>> {
        self.get_progress_impl(user_id, lesson_id).await
    }

    async fn start_lesson_progress(&self, user_id: i64, lesson_id: i64) -> Result<Progress> {
        self.start_lesson_progress_impl(user_id, lesson_id).await
    }

    async fn upsert_progress(
        &self,
        user_id: i64,
        lesson_id: i64,
        update: UpdateProgressRequest,
    ) -> Result<Progress> {
        self.upsert_progress_impl(user_id, lesson_id, update).await
    }

    async fn list_progress_for_user(&self, user_id: i64) -> Result<Vec<Progress>> {
        self.list_progress_for_user_impl(user_id).await
    }

    // 消息模块
    async fn create_message(&self, sender_id: i64, message: SendMessageRequest) -> Result<Message> {
        self.create_message_impl(sender_id, message).await
    }

    async fn get_message_by_id(&self, id: i64) -> Result<Option<Message>> {
        self.get_message_by_id_impl(id).await
    }

    async fn list_conversation(
        &self,
        user_id: i64,
        partner_id: i64,
        query: ConversationQuery,
    ) -> Result<MessageListResponse> {
        self.list_conversation_impl(user_id, partner_id, query)
            .await
    }

    async fn list_conversations(&self, user_id: i64) -> Result<ConversationListResponse> {
        self.list_conversations_impl(user_id).await
    }

    async fn mark_message_read(&self, id: i64, receiver_id: i64) -> Result<Option<Message>> {
        self.mark_message_read_impl(id, receiver_id).await
    }

    async fn mark_conversation_read(&self, user_id: i64, partner_id: i64) -> Result<u64> {
        self.mark_conversation_read_impl(user_id, partner_id).await
    }

    async fn count_unread_messages(&self, user_id: i64) -> Result<i64> {
        self.count_unread_messages_impl(user_id).await
    }

    // 学生-家长关联模块
    async fn create_link(&self, link: CreateLinkRequest) -> Result<StudentParentLink> {
        self.create_link_impl(link).await
    }

    async fn get_link_by_id(&self, id: i64) -> Result<Option<StudentParentLink>> {
        self.get_link_by_id_impl(id).await
    }

    async fn get_link(
        &self,
        student_id: i64,
        parent_id: i64,
    ) -> Result<Option<StudentParentLink>> {
        self.get_link_impl(student_id, parent_id).await
    }

    async fn list_links_for_parent(&self, parent_id: i64) -> Result<LinkListResponse> {
        self.list_links_for_parent_impl(parent_id).await
    }

    async fn delete_link(&self, id: i64) -> Result<bool> {
        self.delete_link_impl(id).await
    }

    // 成就模块
    async fn list_achievements_for_user(&self, user_id: i64) -> Result<AchievementListResponse> {
        self.list_achievements_for_user_impl(user_id).await
    }
}
