//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod check_presence;
pub mod delete_message;
pub mod edit_message;
pub mod error;
pub mod fetch_messages;
pub mod list_participants;
pub mod post_message;
pub mod refresh_status;
pub mod register_participant;
pub mod sweep_inactive_participants;

pub use check_presence::CheckPresenceUseCase;
pub use delete_message::DeleteMessageUseCase;
pub use edit_message::EditMessageUseCase;
pub use error::UseCaseError;
pub use fetch_messages::FetchMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::PostMessageUseCase;
pub use refresh_status::RefreshStatusUseCase;
pub use register_participant::RegisterParticipantUseCase;
pub use sweep_inactive_participants::SweepInactiveParticipantsUseCase;
