use super::SeaOrmStorage;
use std::collections::HashMap;

use crate::entity::student_parents::{ActiveModel, Column, Entity as StudentParents};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, TinyLearnError};
use crate::models::links::{
    entities::StudentParentLink,
    requests::CreateLinkRequest,
    responses::{LinkListResponse, LinkWithStudent},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生-家长关联
    pub async fn create_link_impl(&self, req: CreateLinkRequest) -> Result<StudentParentLink> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            parent_id: Set(req.parent_id),
            relationship: Set(req.relationship.to_string()),
            can_receive_messages: Set(req.can_receive_messages),
            can_view_progress: Set(req.can_view_progress),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("创建关联失败: {e}")))?;

        Ok(result.into_link())
    }

    /// 通过 ID 获取关联
    pub async fn get_link_by_id_impl(&self, id: i64) -> Result<Option<StudentParentLink>> {
        let result = StudentParents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询关联失败: {e}")))?;

        Ok(result.map(|m| m.into_link()))
    }

    /// 获取某学生与某家长之间的关联
    pub async fn get_link_impl(
        &self,
        student_id: i64,
        parent_id: i64,
    ) -> Result<Option<StudentParentLink>> {
        let result = StudentParents::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::ParentId.eq(parent_id))
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询关联失败: {e}")))?;

        Ok(result.map(|m| m.into_link()))
    }

    /// 列出家长名下的关联，附学生信息
    pub async fn list_links_for_parent_impl(&self, parent_id: i64) -> Result<LinkListResponse> {
        let rows = StudentParents::find()
            .filter(Column::ParentId.eq(parent_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询关联列表失败: {e}")))?;

        let student_ids: Vec<i64> = rows.iter().map(|m| m.student_id).collect();
        let students = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询学生信息失败: {e}")))?;

        let students_by_id: HashMap<i64, _> = students
            .into_iter()
            .map(|u| (u.id, u.into_user()))
            .collect();

        let items = rows
            .into_iter()
            .filter_map(|link| {
                let student = students_by_id.get(&link.student_id).cloned()?;
                Some(LinkWithStudent {
                    link: link.into_link(),
                    student,
                })
            })
            .collect();

        Ok(LinkListResponse { items })
    }

    /// 删除关联
    pub async fn delete_link_impl(&self, id: i64) -> Result<bool> {
        let result = StudentParents::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("删除关联失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
