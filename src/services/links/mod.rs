pub mod create;
pub mod delete;
pub mod my_children;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::links::requests::CreateLinkRequest;
use crate::storage::Storage;

pub struct LinkService {
    storage: Option<Arc<dyn Storage>>,
}

impl LinkService {
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

    // 创建学生-家长关联
    pub async fn create_link(
        &self,
        link_data: CreateLinkRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_link(self, link_data, request).await
    }

    // 家长查看自己的子女列表
    pub async fn list_my_children(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my_children::list_my_children(self, request).await
    }

    // 删除关联
    pub async fn delete_link(
        &self,
        link_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_link(self, link_id, request).await
    }
}
