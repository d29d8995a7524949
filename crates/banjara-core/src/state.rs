//! UI-agnostic application state types
//!
//! This module contains the conversation and listing state shared between
//! front ends, and the transitions each backend operation applies to it.
//! A transition is split into a `begin_*` half, run before the request is
//! issued, and a `finish_*` half that consumes the request's outcome. Neither
//! half does any I/O, so the state can only change at those two points.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::attachment;

/// Prompts offered on the empty conversation splash
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "Summarize a PDF",
    "Write product description",
    "Translate text",
    "Answer questions about invoice",
];

pub const SEND_ERROR_PREFIX: &str = "Error: ";
pub const UPLOAD_ERROR_PREFIX: &str = "Upload failed: ";
pub const LISTING_ERROR_PREFIX: &str = "❌ Failed to analyze image: ";

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single turn in a chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender: Sender,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// Local file behind an upload placeholder. Never sent or received.
    #[serde(skip)]
    pub file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_uploading: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            preview_url: None,
            file: None,
            is_uploading: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            ..Self::user(text)
        }
    }

    /// Placeholder shown while a file is on its way to the backend
    pub fn uploading(path: &Path) -> Self {
        Self {
            file: Some(path.to_path_buf()),
            is_uploading: true,
            ..Self::user(format!("📎 Uploaded: {}", attachment::file_name(path)))
        }
    }
}

/// Entry in the chat history sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl ChatSummary {
    /// The title, or the tail of the id for untitled chats
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => {
                let count = self.id.chars().count();
                self.id.chars().skip(count.saturating_sub(5)).collect()
            }
        }
    }
}

/// A chat as returned by the backend when loaded by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Backend answer to a chat file upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReply {
    pub reply: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Chat,
    Listing,
}

/// A message send that passed validation and must now reach the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub chat_id: String,
    pub text: String,
}

/// A chat upload that passed validation and must now reach the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub chat_id: String,
    pub path: PathBuf,
}

/// Conversation state: history, active chat, and its messages
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    pub history: Vec<ChatSummary>,
    pub current_chat_id: Option<String>,
    pub messages: Vec<Message>,
    /// Composer text, filled by typing or by picking a suggested prompt
    pub composer: String,
    pub busy: bool,
    pub tab: Tab,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the send control is enabled
    pub fn can_send(&self) -> bool {
        !self.busy && self.current_chat_id.is_some()
    }

    pub fn is_active(&self, chat_id: &str) -> bool {
        self.current_chat_id.as_deref() == Some(chat_id)
    }

    /// Fill (but do not submit) the composer with a suggested prompt
    pub fn choose_suggestion(&mut self, idx: usize) -> bool {
        match SUGGESTED_PROMPTS.get(idx) {
            Some(prompt) => {
                self.composer = prompt.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace the history with the server's list. Returns the chat to load
    /// next, if any.
    pub fn apply_chat_list(&mut self, chats: Vec<ChatSummary>) -> Option<String> {
        self.history = chats;
        self.history.first().map(|chat| chat.id.clone())
    }

    pub fn apply_loaded_chat(&mut self, chat_id: String, messages: Vec<Message>) {
        self.messages = messages;
        self.current_chat_id = Some(chat_id);
        self.tab = Tab::Chat;
    }

    pub fn apply_new_chat(&mut self, chat: ChatSummary) {
        self.current_chat_id = Some(chat.id.clone());
        self.history.insert(0, chat);
        self.messages.clear();
        self.tab = Tab::Chat;
    }

    /// Optimistically append the user's message. Blank text, or no active
    /// chat, leaves the state untouched and yields no request.
    pub fn begin_send(&mut self, text: &str) -> Option<SendRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let chat_id = self.current_chat_id.clone()?;

        self.messages.push(Message::user(text));
        self.composer.clear();
        self.busy = true;

        Some(SendRequest {
            chat_id,
            text: text.to_string(),
        })
    }

    /// Append the bot's reply, or the error, to the chat the request was
    /// scoped to. A reply for a chat that is no longer loaded is dropped.
    pub fn finish_send<E: Display>(&mut self, chat_id: &str, result: Result<String, E>) {
        self.busy = false;
        if !self.is_active(chat_id) {
            return;
        }

        let text = match result {
            Ok(reply) => reply,
            Err(e) => format!("{}{}", SEND_ERROR_PREFIX, e),
        };
        self.messages.push(Message::bot(text));
    }

    /// Append an uploading placeholder for `path`. Requires an active chat
    /// and a file type the chat endpoint accepts.
    pub fn begin_upload(&mut self, path: &Path) -> Option<UploadRequest> {
        if !attachment::accepts_chat_upload(path) {
            return None;
        }
        let chat_id = self.current_chat_id.clone()?;

        self.messages.push(Message::uploading(path));
        self.busy = true;

        Some(UploadRequest {
            chat_id,
            path: path.to_path_buf(),
        })
    }

    /// Drop the placeholder and append the backend's reply or the failure.
    pub fn finish_upload<E: Display>(&mut self, chat_id: &str, result: Result<UploadReply, E>) {
        self.busy = false;
        self.messages.retain(|m| !m.is_uploading);
        if !self.is_active(chat_id) {
            return;
        }

        let message = match result {
            Ok(reply) => Message {
                preview_url: reply.preview_url,
                ..Message::bot(reply.reply)
            },
            Err(e) => Message::bot(format!("{}{}", UPLOAD_ERROR_PREFIX, e)),
        };
        self.messages.push(message);
    }
}

/// Image-to-listing state, independent of any chat
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    /// Local image being analyzed; shown without a network round-trip
    pub preview: Option<PathBuf>,
    pub result: Option<String>,
    pub busy: bool,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a new image. Non-image files are ignored.
    pub fn begin(&mut self, path: &Path) -> Option<PathBuf> {
        if !attachment::accepts_listing_image(path) {
            return None;
        }

        self.preview = Some(path.to_path_buf());
        self.result = None;
        self.busy = true;
        Some(path.to_path_buf())
    }

    pub fn finish<E: Display>(&mut self, result: Result<String, E>) {
        self.busy = false;
        self.result = Some(match result {
            Ok(listing) => listing,
            Err(e) => format!("{}{}", LISTING_ERROR_PREFIX, e),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_chat(id: &str) -> ChatSession {
        let mut session = ChatSession::new();
        session.apply_new_chat(ChatSummary {
            id: id.to_string(),
            title: None,
        });
        session
    }

    #[test]
    fn message_wire_format_uses_camel_case() {
        let json = r#"{"sender":"bot","text":"hi","previewUrl":"https://x/y.png"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.preview_url.as_deref(), Some("https://x/y.png"));
        assert!(!msg.is_uploading);

        let out = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(out, serde_json::json!({"sender": "user", "text": "hello"}));
    }

    #[test]
    fn display_title_falls_back_to_id_tail() {
        let titled = ChatSummary {
            id: "abcdef123".into(),
            title: Some("Invoices".into()),
        };
        assert_eq!(titled.display_title(), "Invoices");

        let untitled = ChatSummary {
            id: "abcdef123".into(),
            title: Some(String::new()),
        };
        assert_eq!(untitled.display_title(), "ef123");

        let short = ChatSummary {
            id: "ab".into(),
            title: None,
        };
        assert_eq!(short.display_title(), "ab");
    }

    #[test]
    fn blank_send_changes_nothing() {
        let mut session = session_with_chat("c1");
        session.composer = "   ".into();

        assert!(session.begin_send("   \n\t").is_none());
        assert!(session.messages.is_empty());
        assert!(!session.busy);
        assert_eq!(session.composer, "   ");
    }

    #[test]
    fn send_without_chat_issues_no_request() {
        let mut session = ChatSession::new();
        assert!(!session.can_send());
        assert!(session.begin_send("Hello").is_none());
        assert!(session.messages.is_empty());
    }

    #[test]
    fn send_appends_user_then_bot() {
        let mut session = session_with_chat("c1");
        session.composer = "Hello".into();

        let req = session.begin_send("Hello").unwrap();
        assert_eq!(req.chat_id, "c1");
        assert!(session.busy);
        assert!(!session.can_send());
        assert!(session.composer.is_empty());

        session.finish_send::<String>(&req.chat_id, Ok("Hi there".into()));
        assert!(!session.busy);
        assert_eq!(
            session.messages,
            vec![Message::user("Hello"), Message::bot("Hi there")]
        );
    }

    #[test]
    fn failed_send_is_reported_in_chat() {
        let mut session = session_with_chat("c1");
        let req = session.begin_send("Hello").unwrap();
        session.finish_send(&req.chat_id, Err("rate limited"));

        assert_eq!(session.messages.last().unwrap(), &Message::bot("Error: rate limited"));
        assert!(!session.busy);
    }

    #[test]
    fn reply_for_switched_chat_is_dropped() {
        let mut session = session_with_chat("c1");
        let req = session.begin_send("Hello").unwrap();
        session.apply_loaded_chat("c2".into(), vec![Message::user("older")]);

        session.finish_send::<String>(&req.chat_id, Ok("late".into()));
        assert_eq!(session.messages, vec![Message::user("older")]);
        assert!(!session.busy);
    }

    #[test]
    fn upload_replaces_placeholder_with_reply() {
        let mut session = session_with_chat("c1");
        session.messages.push(Message::user("before"));

        let req = session.begin_upload(Path::new("/tmp/invoice.pdf")).unwrap();
        assert_eq!(session.messages.len(), 2);
        let placeholder = session.messages.last().unwrap();
        assert!(placeholder.is_uploading);
        assert_eq!(placeholder.text, "📎 Uploaded: invoice.pdf");
        assert_eq!(placeholder.file.as_deref(), Some(Path::new("/tmp/invoice.pdf")));

        session.finish_upload::<String>(
            &req.chat_id,
            Ok(UploadReply {
                reply: "Looks like an invoice".into(),
                preview_url: Some("https://cdn/p.png".into()),
            }),
        );
        assert_eq!(session.messages.len(), 2);
        assert!(session.messages.iter().all(|m| !m.is_uploading));
        let last = session.messages.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.preview_url.as_deref(), Some("https://cdn/p.png"));
    }

    #[test]
    fn failed_upload_is_reported_in_chat() {
        let mut session = session_with_chat("c1");
        let req = session.begin_upload(Path::new("notes.txt")).unwrap();
        session.finish_upload::<&str>(&req.chat_id, Err("too large"));

        assert_eq!(session.messages, vec![Message::bot("Upload failed: too large")]);
        assert!(!session.busy);
    }

    #[test]
    fn upload_requires_chat_and_accepted_type() {
        let mut session = ChatSession::new();
        assert!(session.begin_upload(Path::new("a.pdf")).is_none());

        let mut session = session_with_chat("c1");
        assert!(session.begin_upload(Path::new("a.exe")).is_none());
        assert!(session.messages.is_empty());
        assert!(!session.busy);
    }

    #[test]
    fn new_chat_prepends_and_clears() {
        let mut session = ChatSession::new();
        session.apply_chat_list(vec![ChatSummary {
            id: "old".into(),
            title: Some("Old".into()),
        }]);
        session.apply_loaded_chat("old".into(), vec![Message::user("x")]);
        session.tab = Tab::Listing;

        session.apply_new_chat(ChatSummary {
            id: "new".into(),
            title: None,
        });
        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history[0].id, "new");
        assert!(session.messages.is_empty());
        assert_eq!(session.current_chat_id.as_deref(), Some("new"));
        assert_eq!(session.tab, Tab::Chat);
    }

    #[test]
    fn chat_list_names_first_entry_to_load() {
        let mut session = ChatSession::new();
        assert_eq!(session.apply_chat_list(Vec::new()), None);

        let next = session.apply_chat_list(vec![
            ChatSummary {
                id: "a".into(),
                title: None,
            },
            ChatSummary {
                id: "b".into(),
                title: None,
            },
        ]);
        assert_eq!(next.as_deref(), Some("a"));
        assert_eq!(session.history.len(), 2);
    }

    #[test]
    fn suggestion_fills_composer_only() {
        let mut session = session_with_chat("c1");
        assert!(session.choose_suggestion(2));
        assert_eq!(session.composer, "Translate text");
        assert!(session.messages.is_empty());
        assert!(!session.choose_suggestion(4));
    }

    #[test]
    fn listing_resets_and_reports() {
        let mut listing = ListingState::new();
        listing.result = Some("previous".into());

        let path = listing.begin(Path::new("shoe.JPG")).unwrap();
        assert_eq!(listing.preview.as_deref(), Some(path.as_path()));
        assert!(listing.result.is_none());
        assert!(listing.busy);

        listing.finish(Err("bad image"));
        assert!(!listing.busy);
        assert_eq!(
            listing.result.as_deref(),
            Some("❌ Failed to analyze image: bad image")
        );
    }

    #[test]
    fn listing_ignores_non_images() {
        let mut listing = ListingState::new();
        assert!(listing.begin(Path::new("doc.pdf")).is_none());
        assert!(listing.preview.is_none());
        assert!(!listing.busy);
    }
}
