use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::messages::{ActiveModel, Column, Entity as Messages, Model};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, TinyLearnError};
use crate::models::{
    PaginationInfo,
    messages::{
        entities::Message,
        requests::{ConversationQuery, SendMessageRequest},
        responses::{
            ConversationListResponse, ConversationPartner, ConversationSummary,
            MessageListResponse,
        },
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 发送消息
    pub async fn create_message_impl(
        &self,
        sender_id: i64,
        req: SendMessageRequest,
    ) -> Result<Message> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            sender_id: Set(sender_id),
            receiver_id: Set(req.receiver_id),
            related_student_id: Set(req.related_student_id),
            subject: Set(req.subject),
            content: Set(req.content),
            is_read: Set(false),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("发送消息失败: {e}")))?;

        Ok(result.into_message())
    }

    /// 通过 ID 获取消息
    pub async fn get_message_by_id_impl(&self, id: i64) -> Result<Option<Message>> {
        let result = Messages::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询消息失败: {e}")))?;

        Ok(result.map(|m| m.into_message()))
    }

    fn conversation_condition(user_id: i64, partner_id: i64) -> Condition {
        Condition::any()
            .add(
                Condition::all()
                    .add(Column::SenderId.eq(user_id))
                    .add(Column::ReceiverId.eq(partner_id)),
            )
            .add(
                Condition::all()
                    .add(Column::SenderId.eq(partner_id))
                    .add(Column::ReceiverId.eq(user_id)),
            )
    }

    /// 分页列出与某对端的会话消息，按时间倒序
    pub async fn list_conversation_impl(
        &self,
        user_id: i64,
        partner_id: i64,
        query: ConversationQuery,
    ) -> Result<MessageListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let select = Messages::find()
            .filter(Self::conversation_condition(user_id, partner_id))
            .order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询消息总数失败: {e}")))?;

        let messages = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询会话消息失败: {e}")))?;

        Ok(MessageListResponse {
            items: messages.into_iter().map(|m| m.into_message()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    /// 列出当前用户的全部会话摘要
    ///
    /// 按对端分组，取每组最新一条消息并统计对端发来的未读数。
    pub async fn list_conversations_impl(&self, user_id: i64) -> Result<ConversationListResponse> {
        let rows: Vec<Model> = Messages::find()
            .filter(
                Condition::any()
                    .add(Column::SenderId.eq(user_id))
                    .add(Column::ReceiverId.eq(user_id)),
            )
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询会话列表失败: {e}")))?;

        // 行已按时间倒序，每个对端第一次出现的行即最新消息
        let mut order: Vec<i64> = Vec::new();
        let mut latest: HashMap<i64, Model> = HashMap::new();
        let mut unread: HashMap<i64, i64> = HashMap::new();

        for row in rows {
            let partner_id = if row.sender_id == user_id {
                row.receiver_id
            } else {
                row.sender_id
            };

            if row.receiver_id == user_id && !row.is_read {
                *unread.entry(partner_id).or_insert(0) += 1;
            }

            if !latest.contains_key(&partner_id) {
                order.push(partner_id);
                latest.insert(partner_id, row);
            }
        }

        let partners = Users::find()
            .filter(UserColumn::Id.is_in(order.clone()))
            .all(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询会话对端失败: {e}")))?;

        let partners_by_id: HashMap<i64, ConversationPartner> = partners
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    ConversationPartner {
                        user_id: u.id,
                        username: u.username,
                        profile_name: u.profile_name,
                        role: u.role,
                    },
                )
            })
            .collect();

        let items = order
            .into_iter()
            .filter_map(|partner_id| {
                let partner = partners_by_id.get(&partner_id)?.clone();
                let last_message = latest.remove(&partner_id)?.into_message();
                Some(ConversationSummary {
                    partner,
                    last_message,
                    unread_count: unread.get(&partner_id).copied().unwrap_or(0),
                })
            })
            .collect();

        Ok(ConversationListResponse { items })
    }

    /// 标记单条消息已读，限接收者本人
    pub async fn mark_message_read_impl(
        &self,
        id: i64,
        receiver_id: i64,
    ) -> Result<Option<Message>> {
        let Some(existing) = Messages::find_by_id(id)
            .filter(Column::ReceiverId.eq(receiver_id))
            .one(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("查询消息失败: {e}")))?
        else {
            return Ok(None);
        };

        if existing.is_read {
            return Ok(Some(existing.into_message()));
        }

        let mut model: ActiveModel = existing.into();
        model.is_read = Set(true);
        model.read_at = Set(Some(chrono::Utc::now().timestamp()));

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("标记已读失败: {e}")))?;

        Ok(Some(result.into_message()))
    }

    /// 标记整个会话已读
    pub async fn mark_conversation_read_impl(&self, user_id: i64, partner_id: i64) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let result = Messages::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .col_expr(Column::ReadAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::ReceiverId.eq(user_id))
            .filter(Column::SenderId.eq(partner_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("批量标记已读失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 当前用户未读消息总数
    pub async fn count_unread_messages_impl(&self, user_id: i64) -> Result<i64> {
        let count = Messages::find()
            .filter(Column::ReceiverId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| TinyLearnError::database_operation(format!("统计未读消息失败: {e}")))?;

        Ok(count as i64)
    }
}
