//! UseCase: 非アクティブ参加者の退室処理
//!
//! ### 何をテストしているか
//! - SweepInactiveParticipantsUseCase::execute() メソッド
//! - stale な参加者の削除と退室メッセージの発行
//!
//! ### どのような状況を想定しているか
//! - 正常系：stale な参加者のみが一度だけ退室する
//! - エッジケース：連続実行しても二度目は何も起きない
//! - 異常系：一人の退室失敗が他の参加者の退室を妨げない

use std::{sync::Arc, time::Duration};

use futures_util::future::join_all;
use yoriai_shared::time::timestamp_to_jst_clock;

use crate::domain::{
    EvictedParticipant, Message, MessageIdFactory, MessageRepository, Participant,
    ParticipantRepository, StatusNotice, Timestamp,
};

use super::error::UseCaseError;

/// 非アクティブ参加者退室のユースケース
pub struct SweepInactiveParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl SweepInactiveParticipantsUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// Evict every participant last seen before `now - stale_after`.
    ///
    /// Each eviction runs independently: a failure is logged and skipped.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<EvictedParticipant>)` - participants removed by this sweep
    /// * `Err(UseCaseError::Internal)` - stale participants could not be listed
    pub async fn execute(
        &self,
        now: Timestamp,
        stale_after: Duration,
    ) -> Result<Vec<EvictedParticipant>, UseCaseError> {
        let stale_after_millis = i64::try_from(stale_after.as_millis()).unwrap_or(i64::MAX);
        let cutoff = now.minus_millis(stale_after_millis);

        let stale = self.participants.find_stale(cutoff).await?;
        if stale.is_empty() {
            return Ok(Vec::new());
        }

        let evictions = stale
            .into_iter()
            .map(|participant| self.evict(participant, cutoff, now));
        let evicted: Vec<EvictedParticipant> =
            join_all(evictions).await.into_iter().flatten().collect();

        tracing::info!(count = evicted.len(), "inactive participants evicted");
        Ok(evicted)
    }

    async fn evict(
        &self,
        participant: Participant,
        cutoff: Timestamp,
        now: Timestamp,
    ) -> Option<EvictedParticipant> {
        match self
            .participants
            .remove_if_stale(&participant.name, cutoff)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(participant = %participant.name, "already refreshed or removed");
                return None;
            }
            Err(e) => {
                tracing::warn!(participant = %participant.name, error = %e, "failed to evict participant");
                return None;
            }
        }

        let left = Message::status(
            MessageIdFactory::generate(),
            participant.name.clone(),
            StatusNotice::Left,
            timestamp_to_jst_clock(now.value()),
        );
        if let Err(e) = self.messages.insert(left).await {
            tracing::error!(participant = %participant.name, error = %e, "failed to record leave notice");
        }

        tracing::info!(participant = %participant.name, last_seen = %participant.last_seen, "participant left");
        Some(EvictedParticipant {
            name: participant.name,
            last_seen: participant.last_seen,
            evicted_at: now,
        })
    }
}
