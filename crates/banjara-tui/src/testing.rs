//! Shared fixtures for the TUI tests.

use std::sync::Arc;

use async_trait::async_trait;
use banjara_core::{Attachment, Chat, ChatBackend, ChatSummary, GatewayError, UploadReply};
use tokio::sync::mpsc;

use crate::app::App;
use crate::tui::AppEvent;

/// Backend that answers every call immediately from canned data
pub struct EchoBackend;

#[async_trait]
impl ChatBackend for EchoBackend {
    async fn list_chats(&self) -> Result<Vec<ChatSummary>, GatewayError> {
        Ok(vec![ChatSummary {
            id: "c1".into(),
            title: Some("First".into()),
        }])
    }

    async fn create_chat(&self) -> Result<ChatSummary, GatewayError> {
        Ok(ChatSummary {
            id: "c2".into(),
            title: None,
        })
    }

    async fn load_chat(&self, chat_id: &str) -> Result<Chat, GatewayError> {
        Ok(Chat {
            id: chat_id.into(),
            title: None,
            messages: Vec::new(),
        })
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, GatewayError> {
        if text == "fail" {
            return Err(GatewayError::Api {
                status: 429,
                message: "rate limited".into(),
            });
        }
        Ok(format!("echo {text}"))
    }

    async fn upload_file(
        &self,
        _chat_id: &str,
        file: &Attachment,
    ) -> Result<UploadReply, GatewayError> {
        Ok(UploadReply {
            reply: format!("read {}", file.file_name),
            preview_url: None,
        })
    }

    async fn analyze_image(&self, _file: &Attachment) -> Result<String, GatewayError> {
        Ok("A listing".into())
    }
}

pub fn app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(Arc::new(EchoBackend), tx), rx)
}
