//! UseCase: メッセージ投稿処理
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 在室確認、入力の無害化と検証、メッセージ履歴への追加
//!
//! ### どのような状況を想定しているか
//! - 正常系：在室中の参加者による投稿
//! - 異常系：未登録ユーザーの投稿、不正な入力（全違反の報告）

use std::sync::Arc;

use yoriai_shared::time::{get_jst_timestamp, timestamp_to_jst_clock};

use crate::domain::{
    Message, MessageDraft, MessageFields, MessageIdFactory, MessageRepository,
    ParticipantRepository,
};

use super::{check_presence::CheckPresenceUseCase, error::UseCaseError};

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    presence: CheckPresenceUseCase,
    messages: Arc<dyn MessageRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            presence: CheckPresenceUseCase::new(participants),
            messages,
        }
    }

    /// メッセージ投稿を実行
    ///
    /// # Arguments
    ///
    /// * `from` - `user` ヘッダーの値（投稿者）
    /// * `fields` - 無害化・検証前の入力
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 保存されたメッセージ
    /// * `Err(UseCaseError::PreconditionFailed)` - 投稿者がオンラインでない
    /// * `Err(UseCaseError::Validation)` - 入力が不正
    pub async fn execute(
        &self,
        from: Option<&str>,
        fields: MessageFields,
    ) -> Result<Message, UseCaseError> {
        let from = self.presence.require_online(from).await?;
        let draft = MessageDraft::parse(fields)?;

        let message = Message::new(
            MessageIdFactory::generate(),
            from,
            draft,
            timestamp_to_jst_clock(get_jst_timestamp()),
        );
        self.messages.insert(message.clone()).await?;

        tracing::info!(
            id = %message.id,
            from = %message.from,
            to = %message.to,
            kind = message.kind.as_str(),
            "message posted"
        );
        Ok(message)
    }
}
