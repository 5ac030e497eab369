pub mod entity;
pub mod ids;
pub mod sort_key;
pub mod text;
pub mod time_serde;

pub use entity::{Account, Conversation, ConversationKind, GroupModel, Message};
pub use ids::{ConversationId, MessageId, RecipientId};
pub use sort_key::{ConversationSortKey, MessageSortKey};
