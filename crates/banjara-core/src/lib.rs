pub mod attachment;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;
pub mod state;

// Re-export main types for convenience
pub use attachment::Attachment;
pub use config::Config;
pub use error::GatewayError;
pub use gateway::{BanjaraClient, ChatBackend};
pub use session::SessionStore;
pub use state::{
    Chat, ChatSession, ChatSummary, ListingState, Message, SendRequest, Sender, Tab, UploadReply,
    UploadRequest, SUGGESTED_PROMPTS,
};
