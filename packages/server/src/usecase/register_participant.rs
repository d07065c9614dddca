//! UseCase: 参加者登録処理
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 名前の重複チェック、参加者の追加、入室メッセージの発行
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：同名の参加者の登録、名前の欠落
//! - エッジケース：大文字小文字のみ異なる名前

use std::sync::Arc;

use yoriai_shared::time::{get_jst_timestamp, timestamp_to_jst_clock};

use crate::domain::{
    Message, MessageIdFactory, MessageRepository, Participant, ParticipantFields,
    ParticipantRepository, RepositoryError, StatusNotice, Timestamp,
};

use super::error::UseCaseError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// 参加者登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(UseCaseError::Validation)` - 名前が不正
    /// * `Err(UseCaseError::Conflict)` - 同名の参加者が既に存在する
    pub async fn execute(&self, fields: ParticipantFields) -> Result<Participant, UseCaseError> {
        let name = fields.parse()?;

        // 1. 重複チェック（完全一致）
        if self.participants.find_by_name(&name).await?.is_some() {
            return Err(UseCaseError::Conflict(name.into_string()));
        }

        // 2. 参加者を追加
        let now = get_jst_timestamp();
        let participant = Participant::new(name.clone(), Timestamp::new(now));
        self.participants
            .insert(participant.clone())
            .await
            .map_err(|e| match e {
                RepositoryError::ParticipantAlreadyExists(name) => UseCaseError::Conflict(name),
                other => UseCaseError::Internal(other),
            })?;

        // 3. 入室メッセージを発行
        let joined = Message::status(
            MessageIdFactory::generate(),
            name,
            StatusNotice::Joined,
            timestamp_to_jst_clock(now),
        );
        self.messages.insert(joined).await?;

        tracing::info!(participant = %participant.name, "participant registered");
        Ok(participant)
    }
}
