use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;
use crate::error::GatewayError;
use crate::state::{Chat, ChatSummary, UploadReply};

/// The only channel to the BanjaraGPT backend.
///
/// Each call is a single request/response; nothing is retried.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn list_chats(&self) -> Result<Vec<ChatSummary>, GatewayError>;

    async fn create_chat(&self) -> Result<ChatSummary, GatewayError>;

    async fn load_chat(&self, chat_id: &str) -> Result<Chat, GatewayError>;

    /// Post a user message, returning the bot's reply text.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, GatewayError>;

    async fn upload_file(
        &self,
        chat_id: &str,
        file: &Attachment,
    ) -> Result<UploadReply, GatewayError>;

    /// Turn a product photo into listing text.
    async fn analyze_image(&self, file: &Attachment) -> Result<String, GatewayError>;
}

#[derive(Serialize)]
struct SendRequestBody<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ReplyResponse {
    reply: String,
}

#[derive(Deserialize)]
struct ListingResponse {
    listing: String,
}

/// HTTP implementation of [`ChatBackend`]
#[derive(Clone)]
pub struct BanjaraClient {
    client: Client,
    base_url: String,
}

impl BanjaraClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ping the base address so a sleeping hosted backend starts spinning up
    /// before the first real request. Failures are only logged.
    pub async fn wake(&self) {
        match self.client.get(&self.base_url).send().await {
            Ok(response) => {
                tracing::debug!(status = %response.status(), "backend wake-up ping answered");
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    base_url = %self.base_url,
                    "backend wake-up ping failed"
                );
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a success body, or turn a failure status into [`GatewayError::Api`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let err = GatewayError::from_response(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), error = %err, "backend returned an error");
        return Err(err);
    }

    serde_json::from_slice(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn file_form(file: &Attachment) -> Result<multipart::Form, GatewayError> {
    let part = multipart::Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(file.mime)?;

    Ok(multipart::Form::new().part("file", part))
}

#[async_trait]
impl ChatBackend for BanjaraClient {
    async fn list_chats(&self) -> Result<Vec<ChatSummary>, GatewayError> {
        let response = self.client.get(self.url("/chats")).send().await?;
        read_json(response).await
    }

    async fn create_chat(&self) -> Result<ChatSummary, GatewayError> {
        let response = self.client.post(self.url("/chat/new")).send().await?;
        let chat: ChatSummary = read_json(response).await?;
        tracing::info!(chat_id = %chat.id, "created chat");
        Ok(chat)
    }

    async fn load_chat(&self, chat_id: &str) -> Result<Chat, GatewayError> {
        let url = self.url(&format!("/chat/{}", chat_id));
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, GatewayError> {
        let url = self.url(&format!("/chat/{}", chat_id));
        tracing::debug!(%chat_id, chars = text.chars().count(), "sending message");

        let response = self
            .client
            .post(url)
            .json(&SendRequestBody { message: text })
            .send()
            .await?;

        let body: ReplyResponse = read_json(response).await?;
        Ok(body.reply)
    }

    async fn upload_file(
        &self,
        chat_id: &str,
        file: &Attachment,
    ) -> Result<UploadReply, GatewayError> {
        let url = self.url(&format!("/chat/{}/upload", chat_id));
        tracing::debug!(
            %chat_id,
            file = %file.file_name,
            bytes = file.bytes.len(),
            "uploading file"
        );

        let response = self
            .client
            .post(url)
            .multipart(file_form(file)?)
            .send()
            .await?;

        read_json(response).await
    }

    async fn analyze_image(&self, file: &Attachment) -> Result<String, GatewayError> {
        tracing::debug!(
            file = %file.file_name,
            bytes = file.bytes.len(),
            "submitting listing image"
        );

        let response = self
            .client
            .post(self.url("/upload-listing-image"))
            .multipart(file_form(file)?)
            .send()
            .await?;

        let body: ListingResponse = read_json(response).await?;
        Ok(body.listing)
    }
}
