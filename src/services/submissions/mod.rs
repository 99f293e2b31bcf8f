pub mod get;
pub mod grade;
pub mod list;
pub mod my;
pub mod submit;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{
    GradeSubmissionRequest, SubmissionListQuery, UpsertSubmissionRequest,
};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 写入/更新草稿
    pub async fn upsert_submission(
        &self,
        submission_data: UpsertSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_submission(self, submission_data, request).await
    }

    // 提交草稿
    pub async fn submit_submission(
        &self,
        submission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_submission(self, submission_id, request).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        submission_id: i64,
        grade_data: GradeSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, submission_id, grade_data, request).await
    }

    // 提交详情
    pub async fn get_submission(
        &self,
        submission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_submission(self, submission_id, request).await
    }

    // 某作业下的全部提交（教师视角）
    pub async fn list_submissions(
        &self,
        assignment_id: i64,
        query: SubmissionListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, assignment_id, query, request).await
    }

    // 当前学生在某作业下的提交
    pub async fn get_my_submission(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        my::get_my_submission(self, assignment_id, request).await
    }
}
