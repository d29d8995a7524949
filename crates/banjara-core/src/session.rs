//! Session store: drives the state transitions against a [`ChatBackend`].
//!
//! Each operation runs its `begin_*` transition, awaits the gateway, and
//! applies exactly one `finish_*` transition. Front ends that cannot block
//! on the request (the terminal UI) call the `perform_*` helpers from a
//! background task and apply the `finish_*` half themselves.

use std::path::Path;

use crate::attachment::Attachment;
use crate::error::GatewayError;
use crate::gateway::ChatBackend;
use crate::state::{ChatSession, ListingState, SendRequest, UploadReply, UploadRequest};

pub async fn perform_send<B>(backend: &B, request: &SendRequest) -> Result<String, GatewayError>
where
    B: ChatBackend + ?Sized,
{
    backend.send_message(&request.chat_id, &request.text).await
}

/// Read the file and post it to the request's chat.
pub async fn perform_upload<B>(
    backend: &B,
    request: &UploadRequest,
) -> Result<UploadReply, GatewayError>
where
    B: ChatBackend + ?Sized,
{
    let file = Attachment::read(&request.path).await?;
    backend.upload_file(&request.chat_id, &file).await
}

pub async fn perform_listing<B>(backend: &B, path: &Path) -> Result<String, GatewayError>
where
    B: ChatBackend + ?Sized,
{
    let file = Attachment::read(path).await?;
    backend.analyze_image(&file).await
}

/// Sequential driver: every operation completes, reply included, before it
/// returns. Suits scripts and front ends that may block on the gateway. The
/// terminal UI instead runs the `perform_*` helpers in background tasks and
/// applies the same `ChatSession`/`ListingState` transitions on its own loop.
pub struct SessionStore<B> {
    backend: B,
    pub chat: ChatSession,
    pub listing: ListingState,
}

impl<B: ChatBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            chat: ChatSession::new(),
            listing: ListingState::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the history with the server's list and open its first chat.
    pub async fn fetch_chats(&mut self) -> Result<(), GatewayError> {
        let chats = self.backend.list_chats().await?;
        if let Some(first) = self.chat.apply_chat_list(chats) {
            self.load_chat(&first).await?;
        }
        Ok(())
    }

    pub async fn load_chat(&mut self, chat_id: &str) -> Result<(), GatewayError> {
        let chat = self.backend.load_chat(chat_id).await?;
        self.chat.apply_loaded_chat(chat_id.to_string(), chat.messages);
        Ok(())
    }

    pub async fn new_chat(&mut self) -> Result<(), GatewayError> {
        let chat = self.backend.create_chat().await?;
        self.chat.apply_new_chat(chat);
        Ok(())
    }

    /// Failures end up as a bot message, never as an error.
    pub async fn send_message(&mut self, text: &str) {
        let Some(request) = self.chat.begin_send(text) else {
            return;
        };
        let result = perform_send(&self.backend, &request).await;
        self.chat.finish_send(&request.chat_id, result);
    }

    pub async fn upload_file(&mut self, path: Option<&Path>) {
        let Some(request) = path.and_then(|p| self.chat.begin_upload(p)) else {
            return;
        };
        let result = perform_upload(&self.backend, &request).await;
        self.chat.finish_upload(&request.chat_id, result);
    }

    pub async fn submit_listing_image(&mut self, path: Option<&Path>) {
        let Some(path) = path.and_then(|p| self.listing.begin(p)) else {
            return;
        };
        let result = perform_listing(&self.backend, &path).await;
        self.listing.finish(result);
    }
}
