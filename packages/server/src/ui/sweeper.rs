//! Background presence sweeper.
//!
//! One sweep per tick, never two at once. Each sweep runs in its own task so
//! that a panic is reported and the next tick still happens.

use std::sync::Arc;

use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use yoriai_shared::time::get_jst_timestamp;

use crate::{config::PresenceConfig, domain::Timestamp, usecase::SweepInactiveParticipantsUseCase};

use super::state::AppState;

/// Spawn the sweeper loop. The first sweep happens one interval after start.
pub fn spawn_presence_sweeper(state: Arc<AppState>, config: PresenceConfig) -> JoinHandle<()> {
    let usecase = Arc::new(SweepInactiveParticipantsUseCase::new(
        state.participants.clone(),
        state.messages.clone(),
    ));

    tokio::spawn(async move {
        let mut ticker = interval_at(
            Instant::now() + config.sweep_interval,
            config.sweep_interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let usecase = usecase.clone();
            let sweep = tokio::spawn(async move {
                let now = Timestamp::new(get_jst_timestamp());
                usecase.execute(now, config.stale_after).await
            });

            match sweep.await {
                Ok(Ok(evicted)) => {
                    tracing::debug!(evicted = evicted.len(), "presence sweep finished");
                }
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "presence sweep failed");
                }
                Err(e) => {
                    tracing::error!(error = %e, "presence sweep task aborted");
                }
            }
        }
    })
}
